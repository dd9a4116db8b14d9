//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the franchise-name pre-request generator.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "fragen")]
#[command(about = "Generate franchise names into a request environment and send requests with them")]
#[command(version)]
pub struct Cli {
    /// Environment file to read and update (.json for Postman format, anything else for dotenv)
    #[arg(long = "env", global = true, value_name = "PATH")]
    pub env: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
