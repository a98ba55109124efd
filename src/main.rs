use anyhow::Result;
use clap::Parser;
use threadrun::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
