//! Core library for range-strip: drops the lines between a start marker and
//! an end marker from a file and writes the file back.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod stripper;

use crate::cli::Cli;
use crate::config::StripConfig;
use crate::document::strip_file;
use anyhow::Context;
use clap::Parser;

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli {} = Cli::parse();

    let config = StripConfig::default();
    let outcome = strip_file(&config)
        .with_context(|| format!("Failed to strip {}", config.path.display()))?;

    log::debug!(
        "Wrote {} lines to {}",
        outcome.lines_read - outcome.lines_removed,
        config.path.display()
    );

    println!("Fixed.");

    Ok(())
}
