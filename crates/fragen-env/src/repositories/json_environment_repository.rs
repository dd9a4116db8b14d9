//! Postman environment export implementation of `EnvironmentRepository`.
//!
//! ```json
//! {
//!   "id": "0b6c3c6e-...",
//!   "name": "local",
//!   "values": [
//!     { "key": "random_number", "value": 42, "type": "default", "enabled": true }
//!   ],
//!   "_postman_variable_scope": "environment"
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fragen_core::{EnvEntry, EnvValue, Environment, EnvironmentRepository, RepositoryError};

use super::{environment_name, read_optional, write_replacing};

const VARIABLE_SCOPE: &str = "environment";
const DEFAULT_VALUE_TYPE: &str = "default";
const EXPORTED_USING: &str = concat!("fragen/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize, Deserialize)]
struct EnvironmentFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    values: Vec<FileEntry>,
    #[serde(rename = "_postman_variable_scope", default)]
    scope: Option<String>,
    #[serde(rename = "_postman_exported_at", default, skip_serializing_if = "Option::is_none")]
    exported_at: Option<String>,
    #[serde(rename = "_postman_exported_using", default, skip_serializing_if = "Option::is_none")]
    exported_using: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FileEntry {
    key: String,
    #[serde(default)]
    value: Value,
    #[serde(rename = "type", default = "default_value_type")]
    value_type: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_value_type() -> String {
    DEFAULT_VALUE_TYPE.to_string()
}

const fn default_enabled() -> bool {
    true
}

/// Map a stored JSON value to an environment value.
///
/// Integers stay numbers; strings stay text; everything else is kept as its
/// JSON text.
fn value_from_json(value: Value) -> EnvValue {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| EnvValue::Text(n.to_string()), EnvValue::Number),
        Value::String(s) => EnvValue::Text(s),
        Value::Null => EnvValue::Text(String::new()),
        other => EnvValue::Text(other.to_string()),
    }
}

fn value_to_json(value: &EnvValue) -> Value {
    match value {
        EnvValue::Number(n) => Value::from(*n),
        EnvValue::Text(s) => Value::String(s.clone()),
    }
}

/// Environment stored as a Postman environment export.
///
/// The file's `id` and each entry's `type` survive a load/save cycle; a file
/// without an `id` gets a fresh one on first save.
#[derive(Debug, Clone)]
pub struct JsonEnvironmentRepository {
    path: PathBuf,
}

impl JsonEnvironmentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<Option<EnvironmentFile>, RepositoryError> {
        let Some(content) = read_optional(&self.path).await? else {
            return Ok(None);
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            RepositoryError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl EnvironmentRepository for JsonEnvironmentRepository {
    async fn load(&self) -> Result<Environment, RepositoryError> {
        let Some(file) = self.read_file().await? else {
            tracing::debug!(path = %self.path.display(), "environment file missing; starting empty");
            return Ok(Environment::new(environment_name(&self.path)));
        };

        let name = file
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| environment_name(&self.path));

        let entries = file.values.into_iter().map(|entry| EnvEntry {
            key: entry.key,
            value: value_from_json(entry.value),
            enabled: entry.enabled,
        });

        let env = Environment::with_entries(name, entries);
        tracing::debug!(path = %self.path.display(), entries = env.len(), "loaded environment");
        Ok(env)
    }

    async fn save(&self, environment: &Environment) -> Result<(), RepositoryError> {
        let existing = self.read_file().await.unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "overwriting unreadable environment file");
            None
        });

        let (id, mut types) = match existing {
            Some(file) => (
                file.id,
                file.values
                    .into_iter()
                    .map(|entry| (entry.key, entry.value_type))
                    .collect::<Vec<_>>(),
            ),
            None => (None, Vec::new()),
        };

        let values = environment
            .entries()
            .iter()
            .map(|entry| {
                let value_type = types
                    .iter()
                    .position(|(key, _)| key == &entry.key)
                    .map_or_else(default_value_type, |idx| types.swap_remove(idx).1);
                FileEntry {
                    key: entry.key.clone(),
                    value: value_to_json(&entry.value),
                    value_type,
                    enabled: entry.enabled,
                }
            })
            .collect();

        let file = EnvironmentFile {
            id: Some(id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string())),
            name: Some(environment.name().to_string()),
            values,
            scope: Some(VARIABLE_SCOPE.to_string()),
            exported_at: Some(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            exported_using: Some(EXPORTED_USING.to_string()),
        };

        let mut json = serde_json::to_string_pretty(&file)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        json.push('\n');

        write_replacing(&self.path, &json).await?;
        tracing::debug!(path = %self.path.display(), entries = environment.len(), "saved environment");
        Ok(())
    }

    fn location(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
