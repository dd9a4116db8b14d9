//! Render command handler.
//!
//! Shows the request the hook would produce, without sending or saving.

use anyhow::Result;
use fragen_core::{FranchiseNameHook, PreparedRequest, ThreadRandom, services};

use crate::bootstrap::CliContext;
use crate::utils::request::{BaseUrlOverride, load_template};

/// Arguments for `fragen render`.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub template: Option<String>,
    pub no_hook: bool,
    pub strict: bool,
}

/// Run the hook on a copy of the environment and render the template.
///
/// The environment file is never written.
pub async fn run(ctx: &CliContext, args: &RenderArgs) -> Result<PreparedRequest> {
    let template = load_template(args.template.as_deref()).await?;
    let hook = if args.no_hook {
        None
    } else {
        Some(FranchiseNameHook::from_settings(ctx.settings())?)
    };
    let strict = args.strict || ctx.settings().effective_strict_templates();

    let mut env = ctx.repository().load().await?;
    let base_url = BaseUrlOverride::apply(&mut env, None, ctx.settings());
    let prepared = services::prepare_request(
        hook.as_ref(),
        &template,
        &mut env,
        &mut ThreadRandom,
        ctx.console(),
        strict,
    );
    base_url.restore(&mut env);

    Ok(prepared?)
}

/// Execute the render command.
pub async fn execute(ctx: &CliContext, args: &RenderArgs) -> Result<()> {
    let prepared = run(ctx, args).await?;
    print!("{}", prepared.request);
    Ok(())
}
