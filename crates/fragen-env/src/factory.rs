//! Composition utilities for picking an environment repository.
//!
//! This module is focused purely on construction and should not contain any
//! format logic.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fragen_core::EnvironmentRepository;

use crate::repositories::{DotenvEnvironmentRepository, JsonEnvironmentRepository};

/// On-disk format of an environment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentFormat {
    /// Postman environment export.
    Json,
    /// `KEY=value` lines.
    Dotenv,
}

impl EnvironmentFormat {
    /// Infer the format from the file extension: `.json` is JSON, anything
    /// else is treated as dotenv.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Dotenv,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Dotenv => "dotenv",
        }
    }
}

/// Open the repository matching `path`'s format.
pub fn open_repository(path: impl Into<PathBuf>) -> Arc<dyn EnvironmentRepository> {
    let path = path.into();
    let format = EnvironmentFormat::from_path(&path);
    tracing::debug!(path = %path.display(), format = format.as_str(), "opening environment repository");

    match format {
        EnvironmentFormat::Json => Arc::new(JsonEnvironmentRepository::new(path)),
        EnvironmentFormat::Dotenv => Arc::new(DotenvEnvironmentRepository::new(path)),
    }
}
