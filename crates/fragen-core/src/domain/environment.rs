//! Environment variables as seen by request templates.
//!
//! An [`Environment`] is an ordered list of named entries, mirroring the
//! variable scopes of request-testing tools: setting a key that already
//! exists overwrites it in place, new keys are appended, and disabled
//! entries are kept but never resolved.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ports::EnvironmentStore;

/// A value stored in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// A native integer.
    Number(i64),
    /// Free-form text.
    Text(String),
}

impl EnvValue {
    /// Interpret the value as an integer.
    ///
    /// Text values are parsed, so both storage forms of a number read back
    /// the same way.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Borrow the raw text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EnvValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for EnvValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvEntry {
    pub key: String,
    pub value: EnvValue,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl EnvEntry {
    /// Create an enabled entry.
    pub fn new(key: impl Into<String>, value: impl Into<EnvValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// A named, ordered set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    name: String,
    entries: Vec<EnvEntry>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Create an environment from existing entries.
    ///
    /// Later duplicates of a key replace earlier ones, keeping the position of
    /// the first occurrence.
    pub fn with_entries(name: impl Into<String>, entries: impl IntoIterator<Item = EnvEntry>) -> Self {
        let mut env = Self::new(name);
        for entry in entries {
            match env.position(&entry.key) {
                Some(idx) => env.entries[idx] = entry,
                None => env.entries.push(entry),
            }
        }
        env
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// All entries, including disabled ones, in insertion order.
    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Enable or disable an entry. Returns `false` if the key is unknown.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.entries[idx].enabled = enabled;
                true
            }
            None => false,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }
}

impl EnvironmentStore for Environment {
    fn set(&mut self, key: &str, value: EnvValue) {
        tracing::debug!(key, %value, environment = %self.name, "set environment variable");
        match self.position(key) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.value = value;
                entry.enabled = true;
            }
            None => self.entries.push(EnvEntry::new(key, value)),
        }
    }

    fn get(&self, key: &str) -> Option<EnvValue> {
        self.entries
            .iter()
            .find(|e| e.key == key && e.enabled)
            .map(|e| e.value.clone())
    }

    fn unset(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        before != self.entries.len()
    }
}
