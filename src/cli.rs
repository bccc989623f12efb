//! Defines the command-line interface for the application.

use clap::Parser;

/// The target file and markers are fixed; the command takes no options.
#[derive(Parser, Debug)]
#[command(
    name = "range-strip",
    version,
    about = "Remove the marked block of lines from src/lib/supabaseService.ts in place."
)]
pub struct Cli {}
