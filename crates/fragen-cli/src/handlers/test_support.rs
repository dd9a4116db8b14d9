//! Context builder for handler tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fragen_core::paths::EnvironmentSource;
use fragen_core::{
    MemoryConsole, RenderedRequest, RequestSender, ResponseSummary, Settings, TransportError,
};
use fragen_env::open_repository;

use crate::bootstrap::CliContext;

/// Sender returning a canned response and recording what it was given.
pub struct RecordingSender {
    pub response: Result<ResponseSummary, String>,
    pub seen: Mutex<Vec<RenderedRequest>>,
}

impl RecordingSender {
    pub fn ok(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(ResponseSummary {
                status,
                body: body.to_string(),
            }),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl RequestSender for RecordingSender {
    async fn send(&self, request: &RenderedRequest) -> Result<ResponseSummary, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        self.response.clone().map_err(TransportError::Network)
    }
}

/// A context over `path` with default settings and an in-memory console.
pub fn context(path: &Path, sender: Arc<RecordingSender>) -> (CliContext, Arc<MemoryConsole>) {
    let console = Arc::new(MemoryConsole::new());
    let ctx = CliContext {
        settings: Settings::with_defaults(),
        environment_path: path.to_path_buf(),
        environment_source: EnvironmentSource::Explicit,
        repository: open_repository(path),
        sender,
        console: console.clone(),
    };
    (ctx, console)
}
