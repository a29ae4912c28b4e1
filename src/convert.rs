use crate::errors::Error;
use crate::units::{ETH_DECIMALS, EthUnit};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An Ethereum amount in all three denominations, as decimal strings.
///
/// `wei` is always an exact integer; `gwei` and `eth` are derived from it
/// by exact decimal scaling, with trailing zeros stripped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthValue {
    pub wei: String,
    pub gwei: String,
    pub eth: String,
}

impl fmt::Display for EthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wei: {}\nGwei: {}\nETH: {}", self.wei, self.gwei, self.eth)
    }
}

/// Convert an amount in the named unit to all three denominations.
///
/// The unit name is matched case-insensitively against wei, gwei, eth.
pub fn convert(amount: &str, unit: &str) -> Result<EthValue, Error> {
    convert_amount(amount, unit.parse()?)
}

pub fn convert_amount(amount: &str, unit: EthUnit) -> Result<EthValue, Error> {
    let wei = unit.to_wei(amount.trim())?;
    Ok(EthValue {
        wei: wei.to_string(),
        gwei: format_decimal(&wei.as_gwei(), ETH_DECIMALS),
        eth: format_decimal(&wei.as_eth(), ETH_DECIMALS),
    })
}

/// Render at a fixed fractional precision, then strip trailing zeros and
/// a bare trailing decimal point. An empty result renders as "0".
pub fn format_decimal(value: &BigDecimal, max_decimals: i64) -> String {
    let fixed = value.with_scale(max_decimals).to_string();
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
