//! Command-line interface for tres_en_raya.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::instrument;

use crate::{AppConfig, ConfigError};

/// Tres en Raya - two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tres_en_raya")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "tres_en_raya.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Print the effective configuration as TOML
    PrintConfig,
}

/// Options for the `play` command.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Prefill the name of the player using X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Prefill the name of the player using O
    #[arg(long)]
    pub player_o: Option<String>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PlayArgs {
    /// Applies command-line overrides on top of the loaded configuration.
    #[instrument(skip(config))]
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(name) = &self.player_x {
            config = config.with_player_x(name.clone());
        }
        if let Some(name) = &self.player_o {
            config = config.with_player_o(name.clone());
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        config
    }
}

impl Cli {
    /// Loads the configuration file named on the command line.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        AppConfig::load_or_default(&self.config)
    }
}
