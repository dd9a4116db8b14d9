//! Dotenv implementation of `EnvironmentRepository`.
//!
//! Values are read with `dotenvy`, so quoting and escapes follow its rules.
//! Saving rewrites the file one assignment at a time. A quoted value may span
//! several lines, so assignments are split the way `dotenvy` reads them.
//! Changed keys are updated where they stand, unchanged assignments keep
//! their original text, and removed keys are dropped along with every line
//! of their value. Comments, blank lines and `export` prefixes are kept.
//! Disabled entries are not written.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use fragen_core::{EnvEntry, EnvValue, Environment, EnvironmentRepository, RepositoryError};

use super::{environment_name, read_optional, write_replacing};

const EXPORT_PREFIX: &str = "export ";

/// Environment stored as `KEY=value` lines.
///
/// Dotenv has no types, so every value reads back as [`EnvValue::Text`].
#[derive(Debug, Clone)]
pub struct DotenvEnvironmentRepository {
    path: PathBuf,
}

impl DotenvEnvironmentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Quote state at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Complete,
    Escape,
    WhiteSpace,
    Open(char),
    OpenEscape(char),
}

/// The quote left open at the end of `line`, if any, starting from `open`.
fn open_quote_after(line: &str, open: Option<char>) -> Option<char> {
    let mut state = open.map_or(Scan::Complete, Scan::Open);
    for c in line.chars() {
        state = match state {
            Scan::WhiteSpace => match c {
                '#' => return None,
                '\\' => Scan::Escape,
                '"' | '\'' => Scan::Open(c),
                _ => Scan::Complete,
            },
            Scan::Complete => match c {
                '\\' => Scan::Escape,
                '"' | '\'' => Scan::Open(c),
                c if c.is_whitespace() && c != '\r' => Scan::WhiteSpace,
                _ => Scan::Complete,
            },
            Scan::Escape => Scan::Complete,
            Scan::Open(quote) => match c {
                '\\' => Scan::OpenEscape(quote),
                c if c == quote => Scan::Complete,
                _ => Scan::Open(quote),
            },
            Scan::OpenEscape(quote) => Scan::Open(quote),
        };
    }
    match state {
        Scan::Open(quote) | Scan::OpenEscape(quote) => Some(quote),
        Scan::Complete | Scan::Escape | Scan::WhiteSpace => None,
    }
}

/// Split `content` into logical lines, joining the lines of a quoted value
/// that spans several of them.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<(String, char)> = None;

    for line in content.lines() {
        let (span, open) = match pending.take() {
            Some((mut span, quote)) => {
                span.push('\n');
                span.push_str(line);
                (span, open_quote_after(line, Some(quote)))
            }
            None if line.trim_start().starts_with('#') => {
                lines.push(line.to_string());
                continue;
            }
            None => (line.to_string(), open_quote_after(line, None)),
        };

        match open {
            Some(quote) => pending = Some((span, quote)),
            None => lines.push(span),
        }
    }

    // An unterminated quote is kept as written
    if let Some((span, _)) = pending {
        lines.push(span);
    }
    lines
}

/// Value `dotenvy` reads from a single assignment.
fn parsed_value(assignment: &str) -> Option<String> {
    dotenvy::from_read_iter(assignment.as_bytes())
        .next()?
        .ok()
        .map(|(_, value)| value)
}

/// Key assigned on this line, if it is an assignment.
fn line_key(line: &str) -> Option<(&str, bool)> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (body, exported) = trimmed
        .strip_prefix(EXPORT_PREFIX)
        .map_or((trimmed, false), |rest| (rest.trim_start(), true));
    let (lhs, _) = body.split_once('=')?;
    let key = lhs.trim();
    (!key.is_empty()).then_some((key, exported))
}

fn is_bare_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '@' | ',' | '+')
}

/// Quote a value so `dotenvy` reads it back unchanged.
fn quote_value(value: &str) -> String {
    if value.chars().all(is_bare_safe) {
        return value.to_string();
    }
    if !value.contains(['\'', '\n']) {
        return format!("'{value}'");
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

fn assignment(key: &str, value: &EnvValue, exported: bool) -> String {
    let prefix = if exported { EXPORT_PREFIX } else { "" };
    format!("{prefix}{key}={}", quote_value(&value.to_string()))
}

/// Rewrite `existing` so it holds exactly the enabled entries of `environment`.
fn rewrite(existing: &str, environment: &Environment) -> String {
    let enabled: Vec<&EnvEntry> = environment.entries().iter().filter(|e| e.enabled).collect();
    let mut written = vec![false; enabled.len()];
    let mut output: Vec<String> = Vec::new();

    for line in logical_lines(existing) {
        let Some((key, exported)) = line_key(&line) else {
            output.push(line);
            continue;
        };

        match enabled.iter().position(|e| e.key == key) {
            Some(idx) if !written[idx] => {
                let value = &enabled[idx].value;
                if parsed_value(&line).is_some_and(|current| current == value.to_string()) {
                    output.push(line);
                } else {
                    output.push(assignment(key, value, exported));
                }
                written[idx] = true;
            }
            // Duplicate assignment or removed key
            _ => {}
        }
    }

    let mut appended = enabled
        .iter()
        .zip(&written)
        .filter(|(_, done)| !**done)
        .map(|(entry, _)| assignment(&entry.key, &entry.value, false))
        .peekable();

    if appended.peek().is_some() && output.last().is_some_and(|last| !last.trim().is_empty()) {
        output.push(String::new());
    }
    output.extend(appended);

    let mut content = output.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    content
}

#[async_trait]
impl EnvironmentRepository for DotenvEnvironmentRepository {
    async fn load(&self) -> Result<Environment, RepositoryError> {
        let name = environment_name(&self.path);
        let Some(content) = read_optional(&self.path).await? else {
            tracing::debug!(path = %self.path.display(), "environment file missing; starting empty");
            return Ok(Environment::new(name));
        };

        let entries = dotenvy::from_read_iter(content.as_bytes())
            .map(|item| {
                item.map(|(key, value)| EnvEntry::new(key, EnvValue::Text(value)))
                    .map_err(|e| {
                        RepositoryError::Serialization(format!("{}: {e}", self.path.display()))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let env = Environment::with_entries(name, entries);
        tracing::debug!(path = %self.path.display(), entries = env.len(), "loaded environment");
        Ok(env)
    }

    async fn save(&self, environment: &Environment) -> Result<(), RepositoryError> {
        let existing = read_optional(&self.path).await?.unwrap_or_default();
        let skipped = environment.entries().iter().filter(|e| !e.enabled).count();
        if skipped > 0 {
            tracing::debug!(skipped, "disabled entries are not written to dotenv files");
        }

        write_replacing(&self.path, &rewrite(&existing, environment)).await?;
        tracing::debug!(path = %self.path.display(), entries = environment.len(), "saved environment");
        Ok(())
    }

    fn location(&self) -> String {
        format!("dotenv:{}", self.path.display())
    }
}
