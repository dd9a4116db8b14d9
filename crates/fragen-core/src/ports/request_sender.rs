//! Request sender port.
//!
//! Issues a rendered request and reports the response. The HTTP client lives
//! in an adapter crate.

use async_trait::async_trait;

use super::TransportError;
use crate::domain::{RenderedRequest, ResponseSummary};

/// Sends rendered requests.
#[async_trait]
pub trait RequestSender: Send + Sync {
    /// Send the request and collect the status and body.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    async fn send(&self, request: &RenderedRequest) -> Result<ResponseSummary, TransportError>;
}
