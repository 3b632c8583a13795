//! Apps resource client.

use tracing::info;

use super::{decode, require_name};
use crate::error::AciResult;
use crate::transport::HttpTransport;
use crate::types::{App, AppDetails, SearchAppsParams};

/// Requests against `apps/*`. Borrowed from [`AciClient::apps`](crate::AciClient::apps).
#[derive(Debug, Clone, Copy)]
pub struct AppsResource<'a> {
    transport: &'a HttpTransport,
}

impl<'a> AppsResource<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Search apps, most relevant to `params.intent` first.
    pub fn search(&self, params: &SearchAppsParams) -> AciResult<Vec<App>> {
        let query = params.to_query();
        info!(?query, "searching apps");
        let body = self.transport.get(&["apps", "search"], &query)?;
        decode(body)
    }

    /// Fetch one app with its functions.
    pub fn get(&self, app_name: &str) -> AciResult<AppDetails> {
        require_name("app_name", app_name)?;
        info!(app_name, "getting app");
        let body = self.transport.get(&["apps", app_name], &[])?;
        decode(body)
    }
}
