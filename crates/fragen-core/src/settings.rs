//! Settings domain types and validation.
//!
//! Settings come from `FRAGEN_*` environment variables (the CLI also loads a
//! `.env` file first) layered over built-in defaults. Unset fields fall back
//! to the defaults through the `effective_*` accessors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    DEFAULT_MAX_NUMBER, DEFAULT_MIN_NUMBER, DEFAULT_PREFIX, EnvValue, MAX_NAME_LENGTH,
    dangerous_pattern,
};

/// Default base URL of the franchise API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest request timeout accepted.
pub const MAX_TIMEOUT_SECS: u64 = 600;

pub const ENV_PREFIX: &str = "FRAGEN_PREFIX";
pub const ENV_MIN: &str = "FRAGEN_MIN";
pub const ENV_MAX: &str = "FRAGEN_MAX";
pub const ENV_NUMBER_STORAGE: &str = "FRAGEN_NUMBER_STORAGE";
pub const ENV_BASE_URL: &str = "FRAGEN_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "FRAGEN_TIMEOUT_SECS";
pub const ENV_STRICT_TEMPLATES: &str = "FRAGEN_STRICT_TEMPLATES";

/// How `random_number` is written into the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStorage {
    /// Store the integer itself.
    #[default]
    Native,
    /// Store its decimal string.
    Text,
}

impl NumberStorage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Text => "text",
        }
    }

    /// Wrap a drawn number in the configured form.
    pub fn to_value(self, number: u32) -> EnvValue {
        match self {
            Self::Native => EnvValue::from(number),
            Self::Text => EnvValue::Text(number.to_string()),
        }
    }
}

impl FromStr for NumberStorage {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "number" | "int" => Ok(Self::Native),
            "text" | "string" => Ok(Self::Text),
            _ => Err(SettingsError::InvalidEnvValue {
                key: ENV_NUMBER_STORAGE,
                value: s.to_string(),
            }),
        }
    }
}

/// Application settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prefix of generated franchise names.
    pub name_prefix: Option<String>,

    /// Lowest number drawn (inclusive).
    pub min_number: Option<u32>,

    /// Highest number drawn (inclusive).
    pub max_number: Option<u32>,

    /// Storage form of `random_number`.
    pub number_storage: Option<NumberStorage>,

    /// Base URL seeded into the environment as `base_url` when absent.
    pub base_url: Option<String>,

    /// Timeout for sent requests, in seconds.
    pub request_timeout_secs: Option<u64>,

    /// Fail rendering when a placeholder has no value.
    pub strict_templates: Option<bool>,
}

impl Settings {
    /// Create settings with sensible defaults.
    pub fn with_defaults() -> Self {
        Self {
            name_prefix: Some(DEFAULT_PREFIX.to_string()),
            min_number: Some(DEFAULT_MIN_NUMBER),
            max_number: Some(DEFAULT_MAX_NUMBER),
            number_storage: Some(NumberStorage::Native),
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            strict_templates: Some(false),
        }
    }

    /// Defaults overridden by `FRAGEN_*` process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `FRAGEN_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::with_defaults();

        if let Some(prefix) = lookup(ENV_PREFIX) {
            settings.name_prefix = Some(prefix.trim().to_string());
        }
        if let Some(raw) = lookup(ENV_MIN) {
            settings.min_number = Some(parse_env(ENV_MIN, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX) {
            settings.max_number = Some(parse_env(ENV_MAX, &raw)?);
        }
        if let Some(raw) = lookup(ENV_NUMBER_STORAGE) {
            settings.number_storage = Some(raw.parse()?);
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            settings.base_url = Some(url.trim().to_string());
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            settings.request_timeout_secs = Some(parse_env(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_STRICT_TEMPLATES) {
            settings.strict_templates = Some(parse_bool(ENV_STRICT_TEMPLATES, &raw)?);
        }

        Ok(settings)
    }

    pub fn effective_name_prefix(&self) -> &str {
        self.name_prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    pub fn effective_min_number(&self) -> u32 {
        self.min_number.unwrap_or(DEFAULT_MIN_NUMBER)
    }

    pub fn effective_max_number(&self) -> u32 {
        self.max_number.unwrap_or(DEFAULT_MAX_NUMBER)
    }

    pub fn effective_number_storage(&self) -> NumberStorage {
        self.number_storage.unwrap_or_default()
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn effective_strict_templates(&self) -> bool {
        self.strict_templates.unwrap_or(false)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid name prefix '{0}': use letters, digits, '.', '_' or '-' and keep names within 100 characters")]
    InvalidPrefix(String),

    #[error("Number range is empty: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Request timeout must be between 1 and 600 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("Base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnvValue { key: &'static str, value: String },
}

fn parse_env<T: FromStr>(key: &'static str, raw: &str) -> Result<T, SettingsError> {
    raw.trim().parse().map_err(|_| SettingsError::InvalidEnvValue {
        key,
        value: raw.to_string(),
    })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidEnvValue {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Check that `prefix` can start a valid franchise name for numbers up to `max`.
pub fn validate_prefix(prefix: &str, max: u32) -> Result<(), SettingsError> {
    let invalid = || SettingsError::InvalidPrefix(prefix.to_string());

    if prefix.is_empty() || dangerous_pattern(prefix).is_some() {
        return Err(invalid());
    }
    if !prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid());
    }
    if prefix.len() + max.to_string().len() > MAX_NAME_LENGTH {
        return Err(invalid());
    }
    Ok(())
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    let min = settings.effective_min_number();
    let max = settings.effective_max_number();
    if min > max {
        return Err(SettingsError::InvalidRange { min, max });
    }

    validate_prefix(settings.effective_name_prefix(), max)?;

    let timeout = settings.effective_timeout_secs();
    if !(1..=MAX_TIMEOUT_SECS).contains(&timeout) {
        return Err(SettingsError::InvalidTimeout(timeout));
    }

    let url = settings.effective_base_url();
    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    if host.is_none_or(str::is_empty) {
        return Err(SettingsError::InvalidBaseUrl(url.to_string()));
    }

    Ok(())
}
