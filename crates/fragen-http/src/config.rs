//! Public configuration for the HTTP sender.

use std::time::Duration;

use fragen_core::Settings;

/// Configuration for [`ReqwestSender`](crate::ReqwestSender).
///
/// # Example
///
/// ```
/// use fragen_http::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_max_retries(0);
/// ```
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Whole-request timeout
    pub(crate) timeout: Duration,
    /// Retry attempts after a failed connection
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("fragen/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(fragen_core::settings::DEFAULT_TIMEOUT_SECS),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(250),
        }
    }
}

impl HttpClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the timeout from application settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new().with_timeout(Duration::from_secs(settings.effective_timeout_secs()))
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries after a connection failure.
    ///
    /// Defaults to 2.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 250ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
