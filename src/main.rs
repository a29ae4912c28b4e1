use clap::Parser;
use ethconv::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = ethconv::run(cli) {
        eprintln!("Error: {}", err);
        eprintln!();
        eprintln!("Usage: ethconv <amount> <unit>");
        eprintln!("Example: ethconv 1 eth");
        eprintln!("Example: ethconv 1000000000000000000 wei");
        process::exit(1);
    }
}
