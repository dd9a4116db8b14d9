//! CLI subcommand definitions.

use clap::Subcommand;

use fragen_core::CaptureRule;

use crate::config_commands::ConfigCommand;
use crate::env_commands::EnvCommand;

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the pre-request hook: draw a number, store franchise_name and random_number
    Generate {
        /// Seed the random source for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Print the generated identifier as JSON
        #[arg(long)]
        json: bool,
        /// Generate without saving the environment
        #[arg(long)]
        dry_run: bool,
    },
    /// Run the hook and print the rendered request without sending it
    Render {
        /// Request template JSON file (defaults to the built-in create-franchise request)
        #[arg(long, value_name = "PATH")]
        template: Option<String>,
        /// Render against the environment as-is, without running the hook
        #[arg(long)]
        no_hook: bool,
        /// Fail if any placeholder has no value
        #[arg(long)]
        strict: bool,
    },
    /// Run the hook, send the rendered request, and save the environment
    Send {
        /// Request template JSON file (defaults to the built-in create-franchise request)
        #[arg(long, value_name = "PATH")]
        template: Option<String>,
        /// Use this base_url for this request only
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Copy a JSON response field into the environment (repeatable)
        #[arg(long = "capture", value_name = "KEY=PATH")]
        captures: Vec<CaptureRule>,
        /// Send with the environment as-is, without running the hook
        #[arg(long)]
        no_hook: bool,
        /// Fail if any placeholder has no value
        #[arg(long)]
        strict: bool,
    },
    /// Inspect or edit the environment file
    Env {
        #[command(subcommand)]
        command: EnvCommand,
    },
    /// Check a franchise name against the API's naming rules
    Validate {
        /// Name to check
        name: String,
    },
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Show resolved data and environment file paths
    Paths,
}
