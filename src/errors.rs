use crate::units::EthUnit;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid unit: {0} (unit must be one of wei, gwei, eth)")]
    InvalidUnit(String),
    #[error("Cannot parse {input:?} as an amount in {unit}")]
    ParseAmount { input: String, unit: EthUnit },
}
