//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use fragen_core::paths::ResolvedPaths;

/// Execute the paths command.
///
/// Resolves and displays all paths used by fragen in `key = value` format.
pub fn execute(environment: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve(environment)?;
    println!("{paths}");
    Ok(())
}
