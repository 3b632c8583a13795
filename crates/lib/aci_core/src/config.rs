//! Client configuration.
//!
//! The core never reads the environment. Callers either build a
//! [`ClientConfig`] directly or hand already-resolved optional values to
//! [`ClientConfig::resolve`], which applies the default endpoint.

use std::fmt;

use url::Url;

use crate::error::{AciError, AciResult};
use crate::transport::RetryPolicy;

/// Endpoint used when no base URL is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.aci.dev/v1/";

/// Environment variable conventionally holding the API key.
pub const API_KEY_ENV: &str = "ACI_API_KEY";

/// Environment variable conventionally holding the base URL.
pub const BASE_URL_ENV: &str = "ACI_BASE_URL";

/// Settings needed to construct an [`AciClient`](crate::AciClient).
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
    /// Retry policy applied to every outbound request.
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Config with the default endpoint and retry policy.
    pub fn new(api_key: impl Into<String>) -> AciResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AciError::Configuration("The API key is empty.".to_string()));
        }
        Ok(Self {
            api_key,
            base_url: normalize_base_url(DEFAULT_BASE_URL)?,
            retry: RetryPolicy::default(),
        })
    }

    /// Build a config from optional values.
    ///
    /// A missing API key is a configuration error; a missing base URL falls
    /// back to [`DEFAULT_BASE_URL`].
    pub fn resolve(api_key: Option<String>, base_url: Option<&str>) -> AciResult<Self> {
        let api_key = api_key
            .ok_or_else(|| AciError::Configuration("The API key is not found.".to_string()))?;
        let config = Self::new(api_key)?;
        match base_url {
            Some(url) => config.with_base_url(url),
            None => Ok(config),
        }
    }

    /// Replace the endpoint. The URL is normalized to end with `/`.
    pub fn with_base_url(mut self, base_url: &str) -> AciResult<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.retry)
            .finish()
    }
}

/// Parse `raw` and make sure its path ends with a trailing slash so that
/// relative request paths join under it instead of replacing its last segment.
pub fn normalize_base_url(raw: &str) -> AciResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| AciError::Configuration(format!("Invalid base URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AciError::Configuration(format!(
            "Base URL '{raw}' cannot be used as a base"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
