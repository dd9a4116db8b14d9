//! `{{variable}}` substitution against an environment store.

use thiserror::Error;

use crate::ports::EnvironmentStore;

/// Errors raised while loading or rendering templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Strict rendering found placeholders with no matching variable.
    #[error("Unresolved template variables: {}", .0.join(", "))]
    Unresolved(Vec<String>),

    /// A template file could not be parsed.
    #[error("Invalid request template: {0}")]
    Parse(String),
}

/// Result of rendering one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Placeholder names with no value, in first-seen order, without duplicates.
    pub unresolved: Vec<String>,
}

/// Replace every `{{ name }}` in `text` with the store's value for `name`.
///
/// Whitespace around the name is ignored. Placeholders naming an unknown or
/// disabled variable are left in the output verbatim and reported in
/// [`Rendered::unresolved`]. An opening `{{` without a closing `}}` is copied
/// through unchanged.
pub fn render_template(text: &str, store: &dyn EnvironmentStore) -> Rendered {
    let mut out = String::with_capacity(text.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let raw = &after_open[..close];
        let name = raw.trim();
        let placeholder = &rest[open..open + 2 + close + 2];

        match store.get(name) {
            Some(value) if !name.is_empty() => out.push_str(&value.to_string()),
            _ => {
                out.push_str(placeholder);
                if !name.is_empty() && !unresolved.iter().any(|u| u == name) {
                    unresolved.push(name.to_string());
                }
            }
        }

        rest = &after_open[close + 2..];
    }
    out.push_str(rest);

    Rendered {
        text: out,
        unresolved,
    }
}
