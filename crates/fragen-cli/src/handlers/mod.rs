//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Load the environment through the context's repository
//!   2. Call fragen-core services
//!   3. Format output for the terminal
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr.

pub mod config;
pub mod env;
pub mod generate;
pub mod paths;
pub mod render;
pub mod send;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;
