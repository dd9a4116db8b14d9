//! Environment file locations.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// Environment variable selecting the environment file.
pub const ENVIRONMENT_FILE_ENV: &str = "FRAGEN_ENVIRONMENT";

/// File name of the default environment inside the data root.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "environment.json";

/// Where the environment file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentSource {
    /// Passed explicitly (e.g. `--env`).
    Explicit,
    /// `FRAGEN_ENVIRONMENT`.
    EnvVar,
    /// `<data_root>/environment.json`.
    Default,
}

/// A resolved environment file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentResolution {
    pub path: PathBuf,
    pub source: EnvironmentSource,
}

/// Default environment file path.
pub fn default_environment_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DEFAULT_ENVIRONMENT_FILE))
}

/// Location of the `.env` file holding `FRAGEN_*` overrides.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

/// Resolve the environment file.
///
/// Resolution order: explicit path, `FRAGEN_ENVIRONMENT`, default.
pub fn resolve_environment_path(explicit: Option<&str>) -> Result<EnvironmentResolution, PathError> {
    if let Some(raw) = explicit {
        return Ok(EnvironmentResolution {
            path: normalize_user_path(raw)?,
            source: EnvironmentSource::Explicit,
        });
    }

    if let Ok(raw) = std::env::var(ENVIRONMENT_FILE_ENV) {
        if !raw.trim().is_empty() {
            return Ok(EnvironmentResolution {
                path: normalize_user_path(&raw)?,
                source: EnvironmentSource::EnvVar,
            });
        }
    }

    Ok(EnvironmentResolution {
        path: default_environment_path()?,
        source: EnvironmentSource::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::platform::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_explicit_path_wins() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let explicit = temp.path().join("staging.json");
        let _env = EnvVarGuard::set(ENVIRONMENT_FILE_ENV, "/tmp/other.json");

        let resolved = resolve_environment_path(Some(explicit.to_str().unwrap())).unwrap();
        assert_eq!(resolved.path, explicit);
        assert_eq!(resolved.source, EnvironmentSource::Explicit);
    }

    #[test]
    fn test_env_var_then_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _data = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        {
            let _env = EnvVarGuard::set(ENVIRONMENT_FILE_ENV, "/tmp/fragen-ci.json");
            let resolved = resolve_environment_path(None).unwrap();
            assert_eq!(resolved.path, PathBuf::from("/tmp/fragen-ci.json"));
            assert_eq!(resolved.source, EnvironmentSource::EnvVar);
        }

        let _cleared = EnvVarGuard::unset(ENVIRONMENT_FILE_ENV);
        let resolved = resolve_environment_path(None).unwrap();
        assert_eq!(resolved.path, temp.path().join(DEFAULT_ENVIRONMENT_FILE));
        assert_eq!(resolved.source, EnvironmentSource::Default);
        assert_eq!(env_file_path().unwrap(), temp.path().join(".env"));
    }
}
