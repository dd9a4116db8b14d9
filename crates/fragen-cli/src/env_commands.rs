//! Environment file subcommands.

use clap::Subcommand;

/// Environment command variants.
#[derive(Subcommand)]
pub enum EnvCommand {
    /// List all variables
    Show {
        /// Print the environment as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one variable's value
    Get {
        /// Variable name
        key: String,
    },
    /// Set a variable
    Set {
        /// Variable name
        key: String,
        /// New value
        value: String,
        /// Store the value as a native integer
        #[arg(long)]
        number: bool,
    },
    /// Remove a variable
    Unset {
        /// Variable name
        key: String,
    },
    /// Remove every variable
    Clear,
}
