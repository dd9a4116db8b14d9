//! Validate command handler.

use anyhow::Result;
use fragen_core::{CoreError, validate_franchise_name};

/// Execute the validate command.
///
/// Prints the trimmed name when it passes; otherwise fails with a data error.
pub fn execute(name: &str) -> Result<()> {
    let accepted = validate_franchise_name(name).map_err(CoreError::from)?;
    println!("✓ '{accepted}' is a valid franchise name");
    Ok(())
}
