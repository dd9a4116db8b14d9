//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from its host.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or file format types in any signature
//! - The hook-facing ports (`RandomSource`, `EnvironmentStore`, `ConsoleSink`)
//!   are synchronous and infallible
//! - Persistence and transport ports are async and return port errors

pub mod console;
pub mod environment_repository;
pub mod environment_store;
pub mod random_source;
pub mod request_sender;

use thiserror::Error;

pub use console::{ConsoleSink, MemoryConsole, NoopConsole, TracingConsole};
pub use environment_repository::EnvironmentRepository;
pub use environment_store::EnvironmentStore;
pub use random_source::RandomSource;
pub use request_sender::RequestSender;

#[cfg(test)]
pub use console::MockConsoleSink;
#[cfg(test)]
pub use random_source::MockRandomSource;

/// Domain-specific errors for environment persistence.
///
/// This error type abstracts away file format details and provides a clean
/// interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested environment was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, permissions, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Domain-specific errors for sending requests.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The rendered request could not be turned into a valid HTTP request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connection or protocol failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete in time.
    #[error("Request timed out: {0}")]
    Timeout(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes,
/// user-facing messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Environment persistence failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Sending a request failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Template loading or strict rendering failed.
    #[error(transparent)]
    Template(#[from] crate::domain::TemplateError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// A franchise name broke the API's naming rules.
    #[error(transparent)]
    Validation(#[from] crate::domain::ValidationError),

    /// A capture rule was malformed.
    #[error(transparent)]
    Capture(#[from] crate::domain::CaptureRuleError),
}
