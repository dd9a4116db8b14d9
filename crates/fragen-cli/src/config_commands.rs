//! Configuration subcommands.

use clap::Subcommand;

/// Configuration command variants.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show effective settings (defaults overlaid with FRAGEN_* variables)
    Show {
        /// Print the settings as JSON
        #[arg(long)]
        json: bool,
    },
}
