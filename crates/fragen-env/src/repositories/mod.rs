//! Environment repository implementations.
//!
//! Each repository implements the `EnvironmentRepository` port from
//! `fragen-core`, so services never depend on file formats directly.

mod dotenv_environment_repository;
mod json_environment_repository;

pub use dotenv_environment_repository::DotenvEnvironmentRepository;
pub use json_environment_repository::JsonEnvironmentRepository;

use std::path::Path;

use fragen_core::RepositoryError;

/// Environment name derived from a file name.
///
/// `local.postman_environment.json` becomes `local`, `.env` stays `.env`.
pub(crate) fn environment_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// Read a file, treating a missing file as `None`.
pub(crate) async fn read_optional(path: &Path) -> Result<Option<String>, RepositoryError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(RepositoryError::Storage(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Replace `path` with `content`, creating parent directories as needed.
///
/// Writes to a sibling temporary file first and renames it over the target.
pub(crate) async fn write_replacing(path: &Path, content: &str) -> Result<(), RepositoryError> {
    let storage = |action: &str, e: std::io::Error| {
        RepositoryError::Storage(format!("failed to {action} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| storage("create parent of", e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    tokio::fs::write(&tmp_path, content)
        .await
        .map_err(|e| storage("write", e))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| storage("replace", e))?;

    Ok(())
}
