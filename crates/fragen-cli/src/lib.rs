#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

// Used only by the binary's entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod env_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use config_commands::ConfigCommand;
pub use env_commands::EnvCommand;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
