//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use fragen_core::paths::PathError;
use fragen_core::{
    CaptureRuleError, CoreError, RepositoryError, SettingsError, TemplateError, TransportError,
    ValidationError,
};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// Input data was rejected (bad template, invalid name, error response).
    #[error("{0}")]
    Data(String),

    /// The remote service could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => EX_USAGE,
            Self::Data(_) => EX_DATAERR,
            Self::Unavailable(_) => EX_UNAVAILABLE,
            Self::Io(_) => EX_IOERR,
            Self::Config(_) => EX_CONFIG,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match core_exit_code(&err) {
            EX_USAGE => Self::Usage(message),
            EX_UNAVAILABLE => Self::Unavailable(message),
            EX_IOERR => Self::Io(message),
            EX_CONFIG => Self::Config(message),
            _ => Self::Data(message),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

const EX_USAGE: u8 = 2;
const EX_DATAERR: u8 = 65;
const EX_UNAVAILABLE: u8 = 69;
const EX_IOERR: u8 = 74;
const EX_CONFIG: u8 = 78;

const fn repository_exit_code(err: &RepositoryError) -> u8 {
    match err {
        RepositoryError::Serialization(_) => EX_DATAERR,
        RepositoryError::NotFound(_) | RepositoryError::Storage(_) => EX_IOERR,
    }
}

const fn transport_exit_code(err: &TransportError) -> u8 {
    match err {
        TransportError::InvalidRequest(_) => EX_DATAERR,
        TransportError::Network(_) | TransportError::Timeout(_) => EX_UNAVAILABLE,
    }
}

const fn core_exit_code(err: &CoreError) -> u8 {
    match err {
        CoreError::Repository(e) => repository_exit_code(e),
        CoreError::Transport(e) => transport_exit_code(e),
        CoreError::Template(_) | CoreError::Validation(_) => EX_DATAERR,
        CoreError::Settings(_) => EX_CONFIG,
        CoreError::Capture(_) => EX_USAGE,
    }
}

fn known_exit_code(cause: &(dyn std::error::Error + 'static)) -> Option<u8> {
    if let Some(e) = cause.downcast_ref::<CliError>() {
        Some(e.exit_code())
    } else if let Some(e) = cause.downcast_ref::<CoreError>() {
        Some(core_exit_code(e))
    } else if let Some(e) = cause.downcast_ref::<RepositoryError>() {
        Some(repository_exit_code(e))
    } else if let Some(e) = cause.downcast_ref::<TransportError>() {
        Some(transport_exit_code(e))
    } else if cause.is::<TemplateError>() || cause.is::<ValidationError>() {
        Some(EX_DATAERR)
    } else if cause.is::<SettingsError>() || cause.is::<PathError>() {
        Some(EX_CONFIG)
    } else if cause.is::<CaptureRuleError>() {
        Some(EX_USAGE)
    } else if cause.is::<std::io::Error>() {
        Some(EX_IOERR)
    } else {
        None
    }
}

/// Exit code for an error that reached `main`.
///
/// Uses the first error in the `anyhow` chain with a known category; anything
/// else exits with 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain().find_map(known_exit_code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_exit_codes() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), 2);
        assert_eq!(CliError::Data("x".into()).exit_code(), 65);
        assert_eq!(CliError::Unavailable("x".into()).exit_code(), 69);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_core_error_mapping() {
        let err: CliError = CoreError::from(TransportError::Timeout("slow".into())).into();
        assert!(matches!(err, CliError::Unavailable(_)));

        let err: CliError = CoreError::from(RepositoryError::Serialization("bad".into())).into();
        assert_eq!(err.exit_code(), 65);

        let err: CliError = CoreError::from(SettingsError::InvalidTimeout(0)).into();
        assert!(matches!(err, CliError::Config(ref msg) if msg.contains('0')));
    }

    #[test]
    fn test_exit_code_for_anyhow_chain() {
        let err = anyhow::Error::from(CoreError::from(ValidationError::Blank));
        assert_eq!(exit_code_for(&err), 65);

        let err = anyhow::Error::from(TransportError::Network("refused".into()))
            .context("sending request");
        assert_eq!(exit_code_for(&err), 69);

        let err = anyhow::Error::from(CliError::Usage("bad".into()));
        assert_eq!(exit_code_for(&err), 2);

        assert_eq!(exit_code_for(&anyhow::anyhow!("something else")), 1);
    }
}
