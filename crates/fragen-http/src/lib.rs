#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod sender;

// ============================================================================
// Public API
// ============================================================================

// Configuration
pub use config::HttpClientConfig;

// Errors
pub use error::HttpError;

// Sender
pub use sender::ReqwestSender;

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
