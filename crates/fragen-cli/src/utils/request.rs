//! Template loading and per-invocation `base_url` handling.

use std::path::Path;

use anyhow::{Context, Result};
use fragen_core::{
    CoreError, EnvEntry, EnvValue, Environment, EnvironmentStore, RequestTemplate, Settings,
};

/// Environment key the built-in template reads the server address from.
pub const BASE_URL_KEY: &str = "base_url";

/// Load a request template from a JSON file, or the built-in create-franchise
/// request when no file is given.
pub async fn load_template(path: Option<&str>) -> Result<RequestTemplate> {
    let Some(path) = path else {
        return Ok(RequestTemplate::create_franchise());
    };

    let content = tokio::fs::read_to_string(Path::new(path))
        .await
        .with_context(|| format!("failed to read template {path}"))?;
    let template = RequestTemplate::from_json(&content).map_err(CoreError::from)?;
    tracing::debug!(path, name = %template.name, "loaded request template");
    Ok(template)
}

/// A `base_url` placed into the environment for one invocation.
///
/// [`restore`](Self::restore) puts back the entry that was there before,
/// including a disabled one, so the temporary value is never persisted.
#[derive(Debug)]
#[must_use]
pub struct BaseUrlOverride {
    applied: bool,
    previous: Option<EnvEntry>,
}

impl BaseUrlOverride {
    /// Apply `explicit` if given; otherwise fill in the configured base URL
    /// when the environment has no enabled `base_url`.
    pub fn apply(env: &mut Environment, explicit: Option<&str>, settings: &Settings) -> Self {
        let value = match explicit {
            Some(url) => url.to_string(),
            None if env.get(BASE_URL_KEY).is_none() => settings.effective_base_url().to_string(),
            None => {
                return Self {
                    applied: false,
                    previous: None,
                };
            }
        };

        let previous = env.entries().iter().find(|e| e.key == BASE_URL_KEY).cloned();
        tracing::debug!(base_url = %value, "using base_url for this request");
        env.set(BASE_URL_KEY, EnvValue::Text(value));
        Self {
            applied: true,
            previous,
        }
    }

    pub fn restore(self, env: &mut Environment) {
        if !self.applied {
            return;
        }
        match self.previous {
            Some(entry) => {
                env.set(BASE_URL_KEY, entry.value);
                env.set_enabled(BASE_URL_KEY, entry.enabled);
            }
            None => {
                env.unset(BASE_URL_KEY);
            }
        }
    }
}
