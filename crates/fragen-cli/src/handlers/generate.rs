//! Generate command handler.
//!
//! Runs the pre-request hook against the environment file.

use anyhow::Result;
use fragen_core::{FranchiseNameHook, GeneratedIdentifier, random_source};

use crate::bootstrap::CliContext;

/// Arguments for `fragen generate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateArgs {
    pub seed: Option<u64>,
    pub json: bool,
    pub dry_run: bool,
}

/// Run the hook and persist the environment unless this is a dry run.
pub async fn run(ctx: &CliContext, args: GenerateArgs) -> Result<GeneratedIdentifier> {
    let hook = FranchiseNameHook::from_settings(ctx.settings())?;
    let mut env = ctx.repository().load().await?;
    let mut rng = random_source(args.seed);

    let identifier = hook.run(rng.as_mut(), &mut env, ctx.console());

    if args.dry_run {
        tracing::info!(location = %ctx.repository().location(), "dry run; environment not saved");
    } else {
        ctx.repository().save(&env).await?;
        tracing::debug!(location = %ctx.repository().location(), "environment saved");
    }

    Ok(identifier)
}

/// Execute the generate command.
///
/// Prints the franchise name, or the whole identifier with `--json`.
pub async fn execute(ctx: &CliContext, args: GenerateArgs) -> Result<()> {
    let identifier = run(ctx, args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&identifier)?);
    } else {
        println!("{}", identifier.franchise_name);
    }
    Ok(())
}
