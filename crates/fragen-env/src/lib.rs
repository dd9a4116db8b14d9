#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;

// Re-export factory for convenient access
pub use factory::{EnvironmentFormat, open_repository};

// Re-export repository implementations
pub use repositories::{DotenvEnvironmentRepository, JsonEnvironmentRepository};
