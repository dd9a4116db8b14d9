//! Franchise name rules enforced by the franchise API.
//!
//! A name the API accepts is non-blank, at most [`MAX_NAME_LENGTH`]
//! characters, made of ASCII letters, digits, whitespace, `.`, `_` and `-`,
//! and free of query-operator or script-injection markers.

use thiserror::Error;

/// Longest franchise name the API accepts.
pub const MAX_NAME_LENGTH: usize = 100;

/// Substrings rejected anywhere in a name, compared case-insensitively.
const DANGEROUS_PATTERNS: &[&str] = &[
    "$",
    "||",
    "&&",
    "javascript:",
    "<script",
    "onerror=",
    "onload=",
    "eval(",
    "exec(",
];

/// Why a franchise name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    Blank,

    #[error("Name contains a forbidden pattern: {0}")]
    DangerousPattern(&'static str),

    #[error("Name exceeds maximum length of {max} characters (got {len})")]
    TooLong { len: usize, max: usize },

    #[error("Name contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Return the first forbidden pattern found in `input`, if any.
pub fn dangerous_pattern(input: &str) -> Option<&'static str> {
    let lowered = input.to_ascii_lowercase();
    DANGEROUS_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lowered.contains(pattern))
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || matches!(c, '.' | '_' | '-')
}

/// Validate a franchise name and return it trimmed.
///
/// ```
/// use fragen_core::domain::{ValidationError, validate_franchise_name};
///
/// assert_eq!(validate_franchise_name("  fra42 ").unwrap(), "fra42");
/// assert_eq!(validate_franchise_name("   "), Err(ValidationError::Blank));
/// ```
pub fn validate_franchise_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank);
    }

    if let Some(pattern) = dangerous_pattern(trimmed) {
        tracing::warn!(name = trimmed, pattern, "rejected potentially dangerous franchise name");
        return Err(ValidationError::DangerousPattern(pattern));
    }

    let len = trimmed.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            len,
            max: MAX_NAME_LENGTH,
        });
    }

    if let Some(bad) = trimmed.chars().find(|c| !is_name_char(*c)) {
        return Err(ValidationError::InvalidCharacter(bad));
    }

    Ok(trimmed.to_string())
}
