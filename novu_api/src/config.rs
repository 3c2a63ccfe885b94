//! Client-wide configuration, fixed once the client is built.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::errors::Error;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.novu.co/v1";

/// Request timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials, endpoint and transport settings shared by every call.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Configuration for the production API with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
        }
    }

    /// Reads `NOVU_API_KEY` (required), `NOVU_BASE_URL` and
    /// `NOVU_TIMEOUT_SECS` from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_key = lookup("NOVU_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Configuration("NOVU_API_KEY is not set".to_string()))?;
        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup("NOVU_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        if let Some(raw) = lookup("NOVU_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::Configuration(format!("NOVU_TIMEOUT_SECS must be a whole number, got `{}`", raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Points the client at another deployment (self-hosted, EU region, or a
    /// mock server in tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Checks everything that would otherwise only fail on the first call.
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is empty".to_string()));
        }
        HeaderValue::from_str(&format!("ApiKey {}", self.api_key))
            .map_err(|_| Error::Configuration("API key contains invalid characters".to_string()))?;
        Url::parse(&self.base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL `{}`: {}", self.base_url, e)))?;
        for (name, value) in &self.default_headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Configuration(format!("invalid header name `{}`", name)))?;
            HeaderValue::from_str(value)
                .map_err(|_| Error::Configuration(format!("invalid value for header `{}`", name)))?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}
