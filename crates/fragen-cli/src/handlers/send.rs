//! Send command handler.
//!
//! Runs the hook, sends the rendered request, applies captures, and saves the
//! environment.

use anyhow::Result;
use fragen_core::{CaptureRule, FranchiseNameHook, RequestRunner, RunOutcome, ThreadRandom};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::request::{BaseUrlOverride, load_template};

/// Arguments for `fragen send`.
#[derive(Debug, Clone, Default)]
pub struct SendArgs {
    pub template: Option<String>,
    pub base_url: Option<String>,
    pub captures: Vec<CaptureRule>,
    pub no_hook: bool,
    pub strict: bool,
}

/// Send one request and save the environment.
///
/// The environment is saved even when sending fails, so the generated name
/// stays available for a retry.
pub async fn run(ctx: &CliContext, args: &SendArgs) -> Result<RunOutcome> {
    let template = load_template(args.template.as_deref()).await?;
    let hook = if args.no_hook {
        None
    } else {
        Some(FranchiseNameHook::from_settings(ctx.settings())?)
    };
    let runner = RequestRunner::new(ctx.sender().clone())
        .with_hook(hook)
        .strict(args.strict || ctx.settings().effective_strict_templates())
        .with_captures(args.captures.clone());

    let mut env = ctx.repository().load().await?;
    let base_url = BaseUrlOverride::apply(&mut env, args.base_url.as_deref(), ctx.settings());
    let result = runner
        .run(&template, &mut env, &mut ThreadRandom, ctx.console())
        .await;
    base_url.restore(&mut env);

    ctx.repository().save(&env).await?;
    Ok(result?)
}

/// Execute the send command.
///
/// Prints the status line and response body. A non-2xx status is reported as
/// an error after the body is printed.
pub async fn execute(ctx: &CliContext, args: &SendArgs) -> Result<()> {
    let outcome = run(ctx, args).await?;

    for (key, value) in &outcome.captured {
        tracing::info!("Captured {key} = {value}");
    }

    println!("HTTP {}", outcome.response.status);
    if !outcome.response.body.is_empty() {
        println!("{}", outcome.response.body);
    }

    let status = outcome.response.status;
    match status {
        200..=299 => Ok(()),
        500..=599 => Err(CliError::Unavailable(format!("server responded with status {status}")).into()),
        _ => Err(CliError::Data(format!("server responded with status {status}")).into()),
    }
}
