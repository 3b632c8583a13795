//! Client session.

use tracing::info;
use url::Url;

use crate::config::ClientConfig;
use crate::error::AciResult;
use crate::resources::{AppsResource, FunctionsResource};
use crate::transport::HttpTransport;

/// Blocking ACI client.
///
/// Owns the HTTP connection pool for its whole lifetime; the pool is released
/// when the client is dropped or [`close`](Self::close)d. The client is
/// `Send + Sync`, so one instance can serve many threads.
#[derive(Debug)]
pub struct AciClient {
    transport: HttpTransport,
}

impl AciClient {
    pub fn new(config: ClientConfig) -> AciResult<Self> {
        let transport = HttpTransport::new(&config)?;
        info!(
            base_url = %config.base_url(),
            max_attempts = config.retry.max_attempts,
            "ACI client created"
        );
        Ok(Self { transport })
    }

    pub fn apps(&self) -> AppsResource<'_> {
        AppsResource::new(&self.transport)
    }

    pub fn functions(&self) -> FunctionsResource<'_> {
        FunctionsResource::new(&self.transport)
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Release the connection pool.
    pub fn close(self) {
        info!(base_url = %self.base_url(), "ACI client closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_normalized_base_url() {
        let config = ClientConfig::new("test_api_key")
            .and_then(|c| c.with_base_url("https://api.example.com/v1"))
            .expect("config");
        let client = AciClient::new(config).expect("client");
        assert_eq!(client.base_url().as_str(), "https://api.example.com/v1/");
        client.close();
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AciClient>();
    }
}
