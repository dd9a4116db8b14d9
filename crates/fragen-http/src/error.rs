//! Internal error types for sending requests.
//!
//! These errors are mapped to the core `TransportError` at the port boundary.

use fragen_core::TransportError;
use thiserror::Error;

/// Errors raised while building or sending an HTTP request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The rendered URL is not a valid absolute URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A rendered header name or value is not valid HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::InvalidUrl { .. } | HttpError::InvalidHeader { .. } => {
                Self::InvalidRequest(err.to_string())
            }
            HttpError::Timeout { .. } => Self::Timeout(err.to_string()),
            HttpError::Client(_) | HttpError::Network(_) => Self::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_header_maps_to_invalid_request() {
        let err = HttpError::InvalidHeader {
            name: "Bad Header".to_string(),
            reason: "invalid HTTP header name".to_string(),
        };
        let transport: TransportError = err.into();
        assert!(matches!(transport, TransportError::InvalidRequest(ref msg) if msg.contains("Bad Header")));
    }

    #[test]
    fn test_timeout_maps_to_timeout() {
        let transport: TransportError = HttpError::Timeout {
            url: "http://localhost:1/api".to_string(),
        }
        .into();
        assert!(matches!(transport, TransportError::Timeout(ref msg) if msg.contains("localhost:1")));
    }
}
