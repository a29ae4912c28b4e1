//! Convert Ethereum amounts between wei, gwei, and ETH.

pub mod convert;
pub mod errors;
pub mod logging;
pub mod units;

pub use convert::{EthValue, convert, convert_amount, format_decimal};
pub use errors::Error;
pub use units::{EthUnit, Wei};

use clap::Parser;

#[derive(Parser)]
#[clap(name = "ethconv")]
#[clap(about = "Convert Ethereum amounts between wei, gwei, and ETH")]
#[clap(version)]
pub struct Cli {
    /// Amount to convert
    pub amount: String,
    /// Unit of the amount: wei, gwei, or eth (case-insensitive)
    pub unit: String,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    use logging::*;

    let log = DEFAULT.new(o!("function" => "run"));
    debug!(log, "converting";
        "amount" => cli.amount.as_str(),
        "unit" => cli.unit.as_str()
    );

    let value = convert(&cli.amount, &cli.unit)?;
    println!("{}", value);
    Ok(())
}
