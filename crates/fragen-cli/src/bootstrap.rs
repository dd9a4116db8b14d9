//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Settings from `FRAGEN_*` variables (via fragen-core)
//! - Environment repository (via fragen-env)
//! - Request sender (via fragen-http)
//!
//! Command handlers receive the fully-composed context and delegate work to it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use fragen_core::paths::{EnvironmentSource, resolve_environment_path};
use fragen_core::{
    ConsoleSink, EnvironmentRepository, RequestSender, Settings, TracingConsole, validate_settings,
};
use fragen_env::open_repository;
use fragen_http::{HttpClientConfig, ReqwestSender};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Environment file given with `--env`.
    pub environment: Option<String>,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Use an explicit environment file.
    #[must_use]
    pub fn with_environment(mut self, environment: Option<String>) -> Self {
        self.environment = environment;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Validated settings.
    pub settings: Settings,
    /// Environment file the commands read and update.
    pub environment_path: PathBuf,
    /// How `environment_path` was chosen.
    pub environment_source: EnvironmentSource,
    /// Persistence for the environment file.
    pub repository: Arc<dyn EnvironmentRepository>,
    /// Transport for `send`.
    pub sender: Arc<dyn RequestSender>,
    /// Where the hook's diagnostic line goes.
    pub console: Arc<dyn ConsoleSink>,
}

impl CliContext {
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn environment_path(&self) -> &Path {
        &self.environment_path
    }

    pub fn repository(&self) -> &Arc<dyn EnvironmentRepository> {
        &self.repository
    }

    pub fn sender(&self) -> &Arc<dyn RequestSender> {
        &self.sender
    }

    pub fn console(&self) -> &dyn ConsoleSink {
        self.console.as_ref()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Reads and validates settings
/// 2. Resolves the environment file and opens the matching repository
/// 3. Creates the HTTP sender with the configured timeout
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Settings
    let settings = Settings::from_env()?;
    validate_settings(&settings)?;

    // 2. Environment file
    let resolution = resolve_environment_path(config.environment.as_deref())?;
    let repository = open_repository(resolution.path.clone());
    tracing::debug!(
        location = %repository.location(),
        source = ?resolution.source,
        "resolved environment file"
    );

    // 3. Transport
    let sender = ReqwestSender::new(&HttpClientConfig::from_settings(&settings))?;

    Ok(CliContext {
        settings,
        environment_path: resolution.path,
        environment_source: resolution.source,
        repository,
        sender: Arc::new(sender),
        console: Arc::new(TracingConsole),
    })
}
