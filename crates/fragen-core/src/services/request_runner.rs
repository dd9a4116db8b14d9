//! Request runner - hook, render, send, capture.

use std::sync::Arc;

use crate::domain::{
    CaptureRule, EnvValue, GeneratedIdentifier, RenderedRequest, RequestTemplate, ResponseSummary,
};
use crate::ports::{ConsoleSink, CoreError, EnvironmentStore, RandomSource, RequestSender};
use crate::services::FranchiseNameHook;

/// A rendered request plus the identifier the hook generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// `None` when the hook was skipped.
    pub identifier: Option<GeneratedIdentifier>,
    pub request: RenderedRequest,
}

/// Everything one send produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub identifier: Option<GeneratedIdentifier>,
    pub request: RenderedRequest,
    pub response: ResponseSummary,
    /// Values written back by capture rules, in rule order.
    pub captured: Vec<(String, EnvValue)>,
}

/// Runs the pre-request hook, renders a template, and sends the result.
pub struct RequestRunner {
    sender: Arc<dyn RequestSender>,
    hook: Option<FranchiseNameHook>,
    strict: bool,
    captures: Vec<CaptureRule>,
}

impl RequestRunner {
    /// Create a runner with the default hook, lenient rendering, and no captures.
    pub fn new(sender: Arc<dyn RequestSender>) -> Self {
        Self {
            sender,
            hook: Some(FranchiseNameHook::default()),
            strict: false,
            captures: Vec::new(),
        }
    }

    /// Replace the hook; `None` renders against the environment as-is.
    #[must_use]
    pub fn with_hook(mut self, hook: Option<FranchiseNameHook>) -> Self {
        self.hook = hook;
        self
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_captures(mut self, captures: Vec<CaptureRule>) -> Self {
        self.captures = captures;
        self
    }

    /// Run the hook (if any) and render the template.
    pub fn prepare(
        &self,
        template: &RequestTemplate,
        store: &mut dyn EnvironmentStore,
        rng: &mut dyn RandomSource,
        console: &dyn ConsoleSink,
    ) -> Result<PreparedRequest, CoreError> {
        prepare_request(self.hook.as_ref(), template, store, rng, console, self.strict)
    }

    /// Prepare, send, and apply captures to the store.
    pub async fn run(
        &self,
        template: &RequestTemplate,
        store: &mut dyn EnvironmentStore,
        rng: &mut dyn RandomSource,
        console: &dyn ConsoleSink,
    ) -> Result<RunOutcome, CoreError> {
        let PreparedRequest {
            identifier,
            request,
        } = self.prepare(template, store, rng, console)?;

        tracing::info!(method = %request.method, url = %request.url, "sending request");
        let response = self.sender.send(&request).await?;
        tracing::info!(status = response.status, "received response");

        let captured = self.apply_captures(&response, store);

        Ok(RunOutcome {
            identifier,
            request,
            response,
            captured,
        })
    }

    fn apply_captures(
        &self,
        response: &ResponseSummary,
        store: &mut dyn EnvironmentStore,
    ) -> Vec<(String, EnvValue)> {
        if self.captures.is_empty() {
            return Vec::new();
        }

        let Some(body) = response.json() else {
            tracing::warn!(
                rules = self.captures.len(),
                "response body is not JSON; skipping captures"
            );
            return Vec::new();
        };

        let mut captured = Vec::new();
        for rule in &self.captures {
            match rule.extract(&body) {
                Some(value) => {
                    store.set(&rule.key, value.clone());
                    captured.push((rule.key.clone(), value));
                }
                None => {
                    tracing::warn!(key = %rule.key, path = %rule.path, "capture path not found in response");
                }
            }
        }
        captured
    }
}

/// Run `hook` against `store`, then render `template` from the updated store.
pub fn prepare_request(
    hook: Option<&FranchiseNameHook>,
    template: &RequestTemplate,
    store: &mut dyn EnvironmentStore,
    rng: &mut dyn RandomSource,
    console: &dyn ConsoleSink,
    strict: bool,
) -> Result<PreparedRequest, CoreError> {
    let identifier = hook.map(|hook| hook.run(rng, store, console));
    let request = template.render(store, strict)?;

    if !request.unresolved.is_empty() {
        tracing::warn!(
            unresolved = %request.unresolved.join(", "),
            "request template has unresolved variables"
        );
    }

    Ok(PreparedRequest {
        identifier,
        request,
    })
}
