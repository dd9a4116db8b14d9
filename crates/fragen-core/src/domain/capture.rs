//! Copy fields of a JSON response back into the environment.

use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use super::environment::EnvValue;

/// A capture rule could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid capture rule '{0}': expected KEY=path.to.field")]
pub struct CaptureRuleError(pub String);

/// `key=dotted.path`: store the response field at `path` under `key`.
///
/// Path segments are object keys; a segment made of digits indexes into an
/// array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRule {
    pub key: String,
    pub path: String,
}

impl CaptureRule {
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Resolve the rule against a response body.
    ///
    /// Returns `None` if the path is missing or points at `null`. Integers
    /// become [`EnvValue::Number`]; strings are taken verbatim; anything else
    /// is stored as its JSON text.
    pub fn extract(&self, body: &Value) -> Option<EnvValue> {
        let mut current = body;
        for segment in self.path.split('.').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        match current {
            Value::Null => None,
            Value::String(s) => Some(EnvValue::Text(s.clone())),
            Value::Number(n) => Some(
                n.as_i64()
                    .map_or_else(|| EnvValue::Text(n.to_string()), EnvValue::Number),
            ),
            other => Some(EnvValue::Text(other.to_string())),
        }
    }
}

impl FromStr for CaptureRule {
    type Err = CaptureRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, path) = s.split_once('=').ok_or_else(|| CaptureRuleError(s.to_string()))?;
        let (key, path) = (key.trim(), path.trim());
        if key.is_empty() || path.is_empty() {
            return Err(CaptureRuleError(s.to_string()));
        }
        Ok(Self::new(key, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "code": "FR-201",
            "title": "Successful",
            "data": {
                "id": "64f1c2",
                "name": "fra42",
                "branches": [{"id": 7, "name": "north"}],
                "rating": 4.5,
                "active": true,
                "closedAt": null
            }
        })
    }

    #[test]
    fn test_parse_rule() {
        let rule: CaptureRule = "franchise_id = data.id".parse().unwrap();
        assert_eq!(rule, CaptureRule::new("franchise_id", "data.id"));

        assert!("no-equals".parse::<CaptureRule>().is_err());
        assert!("=data.id".parse::<CaptureRule>().is_err());
        assert!("key=".parse::<CaptureRule>().is_err());
    }

    #[test]
    fn test_extract_nested_values() {
        let body = body();
        assert_eq!(
            CaptureRule::new("id", "data.id").extract(&body),
            Some(EnvValue::from("64f1c2"))
        );
        assert_eq!(
            CaptureRule::new("branch", "data.branches.0.id").extract(&body),
            Some(EnvValue::Number(7))
        );
        assert_eq!(
            CaptureRule::new("rating", "data.rating").extract(&body),
            Some(EnvValue::from("4.5"))
        );
        assert_eq!(
            CaptureRule::new("active", "data.active").extract(&body),
            Some(EnvValue::from("true"))
        );
    }

    #[test]
    fn test_extract_missing_or_null() {
        let body = body();
        assert_eq!(CaptureRule::new("x", "data.missing").extract(&body), None);
        assert_eq!(CaptureRule::new("x", "data.branches.3").extract(&body), None);
        assert_eq!(CaptureRule::new("x", "data.closedAt").extract(&body), None);
        assert_eq!(CaptureRule::new("x", "code.inner").extract(&body), None);
    }
}
