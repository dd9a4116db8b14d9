//! Path utilities for fragen data directories and environment files.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O

mod environment;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use environment::{
    DEFAULT_ENVIRONMENT_FILE, ENVIRONMENT_FILE_ENV, EnvironmentResolution, EnvironmentSource,
    default_environment_path, env_file_path, resolve_environment_path,
};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path};
pub use resolver::ResolvedPaths;
