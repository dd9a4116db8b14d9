//! `reqwest` implementation of the `RequestSender` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use fragen_core::{HttpMethod, RenderedRequest, RequestSender, ResponseSummary, TransportError};

use crate::config::HttpClientConfig;
use crate::error::HttpError;

/// Upper bound on the wait between connection retries.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Exponential backoff for the given 1-based retry attempt, capped at
/// [`MAX_RETRY_DELAY`].
fn retry_delay(base: Duration, attempt: u8) -> Duration {
    let exponent = u32::from(attempt.saturating_sub(1));
    let factor = 2u32.checked_pow(exponent).unwrap_or(u32::MAX);
    base.saturating_mul(factor).min(MAX_RETRY_DELAY)
}

/// Sends rendered requests over HTTP(S).
///
/// Connection failures are retried with exponential backoff. Timeouts and
/// errors after the request reached the server are not, since the server may
/// already have acted on it.
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestSender {
    pub fn new(config: &HttpClientConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// Turn a rendered request into a `reqwest` request.
    fn build_request(&self, request: &RenderedRequest) -> Result<reqwest::Request, HttpError> {
        let url = Url::parse(&request.url).map_err(|e| HttpError::InvalidUrl {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::with_capacity(request.headers.len());
        for header in &request.headers {
            let invalid = |reason: String| HttpError::InvalidHeader {
                name: header.name.clone(),
                reason,
            };
            let name = HeaderName::from_bytes(header.name.trim().as_bytes())
                .map_err(|e| invalid(e.to_string()))?;
            let value =
                HeaderValue::from_str(&header.value).map_err(|e| invalid(e.to_string()))?;
            headers.append(name, value);
        }

        let mut builder = self
            .client
            .request(to_method(request.method), url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        Ok(builder.build()?)
    }

    async fn execute_with_retry(
        &self,
        request: reqwest::Request,
        url: &str,
    ) -> Result<reqwest::Response, HttpError> {
        let mut attempt: u8 = 0;
        loop {
            let Some(current) = request.try_clone() else {
                return self.execute_once(request, url).await;
            };

            match self.execute_once(current, url).await {
                Err(HttpError::Network(e)) if e.is_connect() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = retry_delay(self.retry_base_delay, attempt);
                    tracing::warn!(attempt, url, ?delay, error = %e, "connection failed; retrying");
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    async fn execute_once(
        &self,
        request: reqwest::Request,
        url: &str,
    ) -> Result<reqwest::Response, HttpError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| classify(e, url))
    }
}

fn classify(error: reqwest::Error, url: &str) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout {
            url: url.to_string(),
        }
    } else {
        HttpError::Network(error)
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl RequestSender for ReqwestSender {
    async fn send(&self, request: &RenderedRequest) -> Result<ResponseSummary, TransportError> {
        let built = self.build_request(request)?;
        tracing::debug!(method = %request.method, url = %request.url, headers = request.headers.len(), "dispatching request");

        let response = self.execute_with_retry(built, &request.url).await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, &request.url))?;

        tracing::debug!(status, bytes = body.len(), "response body read");
        Ok(ResponseSummary { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragen_core::Header;

    fn sender() -> ReqwestSender {
        ReqwestSender::new(&HttpClientConfig::new()).unwrap()
    }

    fn request(url: &str, headers: Vec<Header>) -> RenderedRequest {
        RenderedRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers,
            body: Some(r#"{"name":"fra1"}"#.to_string()),
            unresolved: Vec::new(),
        }
    }

    #[test]
    fn test_build_request_sets_method_headers_and_body() {
        let built = sender()
            .build_request(&request(
                "http://localhost:8080/api/franchises",
                vec![Header::new("Content-Type", "application/json")],
            ))
            .unwrap();

        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.url().path(), "/api/franchises");
        assert_eq!(built.headers()["content-type"], "application/json");
        assert_eq!(
            built.body().and_then(reqwest::Body::as_bytes),
            Some(br#"{"name":"fra1"}"#.as_slice())
        );
    }

    #[test]
    fn test_unrendered_url_is_invalid_request() {
        let err = sender()
            .build_request(&request("{{base_url}}/api/franchises", Vec::new()))
            .unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl { .. }));
        assert!(matches!(TransportError::from(err), TransportError::InvalidRequest(_)));
    }

    #[test]
    fn test_bad_header_name_is_invalid_request() {
        let err = sender()
            .build_request(&request(
                "http://localhost:8080/",
                vec![Header::new("Bad Header", "x")],
            ))
            .unwrap_err();
        assert!(matches!(err, HttpError::InvalidHeader { ref name, .. } if name == "Bad Header"));
    }

    #[test]
    fn test_send_rejects_unrendered_url_before_connecting() {
        let err = tokio_test::block_on(sender().send(&request("{{base_url}}/x", Vec::new())))
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(ref msg) if msg.contains("{{base_url}}")));
    }

    #[test]
    fn test_retry_delay_doubles_then_caps() {
        let base = Duration::from_millis(250);
        assert_eq!(retry_delay(base, 1), Duration::from_millis(250));
        assert_eq!(retry_delay(base, 2), Duration::from_millis(500));
        assert_eq!(retry_delay(base, 3), Duration::from_secs(1));
        assert_eq!(retry_delay(base, 33), MAX_RETRY_DELAY);
        assert_eq!(retry_delay(base, u8::MAX), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_method(HttpMethod::Delete), Method::DELETE);
    }
}
