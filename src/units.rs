use crate::errors::Error;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

pub(crate) const ONE_GWEI: u128 = 10_u128.pow(9);
pub(crate) const ONE_ETH: u128 = 10_u128.pow(18);

/// Decimal places of wei below one gwei / one ETH.
pub const GWEI_DECIMALS: i64 = 9;
pub const ETH_DECIMALS: i64 = 18;

/// An amount of wei, the canonical representation of every input.
///
/// Wei amounts can exceed u128 (and the original inputs are signed),
/// so this wraps a BigInt.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Wei(pub BigInt);

impl Wei {
    pub fn from_eth(eth: &BigDecimal) -> Self {
        Wei(truncate(eth * BigDecimal::from(ONE_ETH)))
    }

    pub fn from_gwei(gwei: &BigDecimal) -> Self {
        Wei(truncate(gwei * BigDecimal::from(ONE_GWEI)))
    }

    pub fn from_wei(wei: BigInt) -> Self {
        Wei(wei)
    }

    pub fn as_gwei(&self) -> BigDecimal {
        BigDecimal::new(self.0.clone(), GWEI_DECIMALS)
    }

    pub fn as_eth(&self) -> BigDecimal {
        BigDecimal::new(self.0.clone(), ETH_DECIMALS)
    }

    pub fn as_wei(&self) -> &BigInt {
        &self.0
    }
}

// Drops fractional wei, rounding toward zero.
fn truncate(value: BigDecimal) -> BigInt {
    value
        .with_scale_round(0, RoundingMode::Down)
        .into_bigint_and_exponent()
        .0
}

impl From<BigInt> for Wei {
    fn from(wei: BigInt) -> Self {
        Wei::from_wei(wei)
    }
}

impl Zero for Wei {
    fn zero() -> Self {
        Wei(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add<Wei> for Wei {
    type Output = Wei;

    fn add(self, other: Wei) -> Self::Output {
        Wei(self.0 + other.0)
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Wei {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Wei(s.parse()?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EthUnit {
    Wei,
    Gwei,
    Eth,
}

impl EthUnit {
    /// Parse an amount given in this unit down to wei.
    ///
    /// Wei amounts must be integers and keep full precision at any
    /// magnitude. Gwei and ETH amounts are parsed as exact decimals,
    /// scaled up, and truncated toward zero.
    pub fn to_wei(&self, amount: &str) -> Result<Wei, Error> {
        let bad_amount = || Error::ParseAmount {
            input: amount.to_string(),
            unit: *self,
        };
        match self {
            EthUnit::Wei => amount.parse().map_err(|_| bad_amount()),
            EthUnit::Gwei => BigDecimal::from_str(amount)
                .map(|d| Wei::from_gwei(&d))
                .map_err(|_| bad_amount()),
            EthUnit::Eth => BigDecimal::from_str(amount)
                .map(|d| Wei::from_eth(&d))
                .map_err(|_| bad_amount()),
        }
    }

    pub fn from_wei(&self, amount: &Wei) -> BigDecimal {
        match self {
            EthUnit::Wei => BigDecimal::from(amount.0.clone()),
            EthUnit::Gwei => amount.as_gwei(),
            EthUnit::Eth => amount.as_eth(),
        }
    }
}

impl fmt::Display for EthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EthUnit::Wei => write!(f, "wei"),
            EthUnit::Gwei => write!(f, "gwei"),
            EthUnit::Eth => write!(f, "ETH"),
        }
    }
}

impl FromStr for EthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wei" => Ok(EthUnit::Wei),
            "gwei" => Ok(EthUnit::Gwei),
            "eth" => Ok(EthUnit::Eth),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}
