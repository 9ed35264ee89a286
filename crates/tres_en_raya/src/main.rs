//! Tres en Raya - terminal entry point.

use anyhow::Result;
use clap::Parser;
use tres_en_raya::{Cli, Command, PlayArgs, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_tui(args.apply(config)),
        Command::PrintConfig => {
            println!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
