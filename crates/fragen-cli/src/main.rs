//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to fragen-core services.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fragen_cli::handlers::generate::GenerateArgs;
use fragen_cli::handlers::render::RenderArgs;
use fragen_cli::handlers::send::SendArgs;
use fragen_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};
use fragen_core::paths::env_file_path;

/// Install the stderr log subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `info`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load `.env` from the working directory, then from the data directory.
///
/// Variables already set in the process environment are never overridden.
fn load_dotenv() {
    dotenvy::dotenv().ok();
    if let Ok(path) = env_file_path() {
        dotenvy::from_path(path).ok();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // These work without valid settings
    match &command {
        Commands::Paths => return handlers::paths::execute(cli.env.as_deref()),
        Commands::Validate { name } => return handlers::validate::execute(name),
        _ => {}
    }

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::with_defaults().with_environment(cli.env);
    let ctx = bootstrap(config)?;

    match command {
        Commands::Generate {
            seed,
            json,
            dry_run,
        } => {
            let args = GenerateArgs {
                seed,
                json,
                dry_run,
            };
            handlers::generate::execute(&ctx, args).await?;
        }
        Commands::Render {
            template,
            no_hook,
            strict,
        } => {
            let args = RenderArgs {
                template,
                no_hook,
                strict,
            };
            handlers::render::execute(&ctx, &args).await?;
        }
        Commands::Send {
            template,
            base_url,
            captures,
            no_hook,
            strict,
        } => {
            let args = SendArgs {
                template,
                base_url,
                captures,
                no_hook,
                strict,
            };
            handlers::send::execute(&ctx, &args).await?;
        }
        Commands::Env { command } => {
            handlers::env::execute(&ctx, command).await?;
        }
        Commands::Config { command } => {
            handlers::config::execute(&ctx, &command)?;
        }
        Commands::Paths | Commands::Validate { .. } => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before the filter reads RUST_LOG
    load_dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
