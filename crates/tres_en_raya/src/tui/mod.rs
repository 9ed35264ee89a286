//! Terminal UI for Tres en Raya.

mod board;
mod controller;
mod input;
mod restore;
mod screen;
mod screens;
mod widgets;

pub use controller::{ActiveScreen, Controller};
pub use screen::{Screen, ScreenTransition};
pub use screens::{MatchScreen, SetupScreen};

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::AppConfig;
use restore::RestoreGuard;

/// Runs the terminal app until the player quits.
///
/// Logs go to the configured file so they never draw over the UI. The
/// terminal is restored on every exit, including failed setup and panics.
pub fn run_tui(config: AppConfig) -> Result<()> {
    init_tracing(&config)?;
    info!("Starting Tres en Raya TUI");

    // Raw mode may already be on when a later setup step fails.
    let _restore = RestoreGuard::new(ratatui::restore);
    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;

    let mut controller = Controller::new(config);
    let res = controller.run(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
