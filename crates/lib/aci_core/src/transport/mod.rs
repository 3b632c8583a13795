//! HTTP transport: pooled blocking client with fixed headers, retries and
//! status classification.
//!
//! Every request goes through [`RetryPolicy::run`] and every response through
//! [`classify_response`], so resource clients only deal with JSON payloads and
//! [`AciError`]s.

mod retry;

pub use retry::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_WAIT, DEFAULT_MIN_WAIT, DEFAULT_MULTIPLIER, RetryPolicy,
};

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{AciError, AciResult};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared HTTP transport. Owned by [`AciClient`](crate::AciClient); resource
/// clients borrow it.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl HttpTransport {
    /// Open the connection pool with the configured headers.
    pub fn new(config: &ClientConfig) -> AciResult<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key()).map_err(|e| {
            AciError::Configuration(format!("API key is not a valid header value: {e}"))
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AciError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            retry: config.retry,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Resolve `segments` under the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are validated as hierarchical in `normalize_base_url`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET` with query pairs. Repeated keys are sent as repeated pairs.
    pub fn get(&self, segments: &[&str], query: &[(&str, String)]) -> AciResult<Value> {
        let mut url = self.url(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        let label = format!("GET {}", segments.join("/"));
        self.send(&label, || self.client.get(url.clone()))
    }

    /// `POST` with a JSON body.
    pub fn post(&self, segments: &[&str], body: &Value) -> AciResult<Value> {
        let url = self.url(segments);
        let label = format!("POST {}", segments.join("/"));
        self.send(&label, || self.client.post(url.clone()).json(body))
    }

    fn send<F>(&self, label: &str, build: F) -> AciResult<Value>
    where
        F: Fn() -> RequestBuilder,
    {
        self.retry.run(
            label,
            || {
                let response = build().send()?;
                let status = response.status().as_u16();
                let text = response.text()?;
                debug!(operation = label, status, "response received");
                classify_response(status, &text)
            },
            AciError::is_retryable,
        )
    }
}

/// Map an HTTP status and raw body onto a payload or an [`AciError`].
///
/// A 200 body must be JSON (an empty body is `null`). For error statuses the
/// body is parsed best-effort to pull out a `message` or `error` field,
/// falling back to the raw text.
pub fn classify_response(status: u16, text: &str) -> AciResult<Value> {
    if status == 200 {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(text).map_err(AciError::from);
    }

    let parsed: Option<Value> = serde_json::from_str(text).ok();
    let message = parsed
        .as_ref()
        .and_then(Value::as_object)
        .and_then(|body| message_field(body, "message").or_else(|| message_field(body, "error")))
        .unwrap_or_else(|| text.to_string());
    let body = text.to_string();

    Err(match status {
        400 => AciError::Validation {
            message,
            status_code: Some(status),
            body: Some(body),
        },
        401 => AciError::Authentication {
            message,
            status_code: status,
            body,
        },
        403 => AciError::Permission {
            message,
            status_code: status,
            body,
        },
        404 => AciError::NotFound {
            message,
            status_code: status,
            body,
        },
        429 => AciError::RateLimit {
            message,
            status_code: status,
            body,
        },
        500..=599 => AciError::Server {
            message,
            status_code: status,
            body,
        },
        _ => AciError::Unknown {
            message: format!("Unexpected error occurred. Status code: {status}"),
            status_code: status,
            body,
        },
    })
}

fn message_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
