//! Shared fixtures for HTTP integration tests.
//!
//! The client under test is blocking, so each test drives the mock server
//! through its own small runtime and issues requests from the test thread.

#![allow(dead_code)]

use aci_core::transport::DEFAULT_MAX_ATTEMPTS;
use aci_core::{AciClient, ClientConfig, RetryPolicy};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

pub const API_KEY: &str = "test_api_key";
pub const LINKED_ACCOUNT_OWNER_ID: &str = "test_linked_account_owner_id";

pub struct TestServer {
    // Declared before `rt` so the server is dropped first.
    pub server: MockServer,
    rt: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    /// Base URL without the trailing slash, to exercise normalization.
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Client with the default attempt budget and no backoff sleeps.
    pub fn client(&self) -> AciClient {
        self.client_with(RetryPolicy::without_backoff(DEFAULT_MAX_ATTEMPTS))
    }

    pub fn client_with(&self, retry: RetryPolicy) -> AciClient {
        let config = ClientConfig::new(API_KEY)
            .and_then(|c| c.with_base_url(&self.base_url()))
            .expect("config")
            .with_retry(retry);
        AciClient::new(config).expect("client")
    }
}

/// Query pairs of a recorded request, in order.
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn body_json(request: &Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}
