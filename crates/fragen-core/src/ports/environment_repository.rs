//! Environment repository trait definition.
//!
//! This port defines how a whole [`Environment`] is loaded and saved.
//! Implementations handle all file format details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Environment;

/// Repository for environment persistence.
///
/// # Design Rules
///
/// - Loading a location that does not exist yet yields an empty environment
/// - `save` replaces the stored environment as a whole
#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// Load the stored environment.
    async fn load(&self) -> Result<Environment, RepositoryError>;

    /// Save the environment.
    async fn save(&self, environment: &Environment) -> Result<(), RepositoryError>;

    /// Human-readable description of where the environment lives.
    fn location(&self) -> String;
}
