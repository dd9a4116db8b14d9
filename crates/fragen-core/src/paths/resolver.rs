//! All resolved paths in one struct, for `fragen paths`.

use std::path::PathBuf;

use super::{EnvironmentSource, PathError, data_root, env_file_path, resolve_environment_path};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data
    pub data_root: PathBuf,
    /// `.env` file with `FRAGEN_*` overrides
    pub env_file: PathBuf,
    /// Environment file the hook writes to
    pub environment: PathBuf,
    /// How the environment file was resolved
    pub environment_source: EnvironmentSource,
}

impl ResolvedPaths {
    /// Resolve all paths, honouring an explicit environment file.
    pub fn resolve(environment: Option<&str>) -> Result<Self, PathError> {
        let resolution = resolve_environment_path(environment)?;
        Ok(Self {
            data_root: data_root()?,
            env_file: env_file_path()?,
            environment: resolution.path,
            environment_source: resolution.source,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "env_file = {}", self.env_file.display())?;
        writeln!(f, "environment = {}", self.environment.display())?;
        write!(f, "environment_source = {:?}", self.environment_source)
    }
}
