//! Platform-specific path resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FRAGEN_DATA_DIR";

/// Get the root directory for application data (environments, `.env`).
///
/// Resolution order:
/// 1. `FRAGEN_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/fragen`), created on demand
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    let root = data_dir.join("fragen");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honours_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(data_root().unwrap(), temp.path());
    }

    #[test]
    fn test_normalize_relative_path() {
        let path = normalize_user_path("env/local.json").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("env/local.json"));
    }

    #[test]
    fn test_normalize_empty_path() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }
}
