//! `ACI_SEARCH_APPS`: lets the model find apps (groups of functions)
//! relevant to its task.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::params::{self, MAX_LIMIT, MIN_LIMIT};
use super::schema::strict_parameters;
use crate::error::AciResult;
use crate::types::SearchAppsParams;

pub const NAME: &str = "ACI_SEARCH_APPS";
pub const LEGACY_NAME: &str = "AIPOLABS_SEARCH_APPS";

pub const DESCRIPTION: &str = "Find apps (each a set of related functions) that can help complete \
    your task or fetch the data and information you need.";

/// Parameters for the `ACI_SEARCH_APPS` meta function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[schemars(transform = strict_parameters)]
pub struct SearchAppsRequest {
    /// What you are trying to do. Results are sorted by relevance to it, e.g.
    /// 'what is the top news in the stock market today' or 'automate outbound
    /// marketing emails'.
    #[serde(default, deserialize_with = "params::intent")]
    #[schemars(with = "Option<String>")]
    pub intent: Option<String>,
    /// Maximum number of apps to return. The service returns 100 when null.
    #[serde(default, deserialize_with = "params::limit")]
    #[schemars(with = "Option<i64>", range(min = 1, max = 1000))]
    pub limit: Option<i64>,
    /// Pagination offset. The service starts at 0 when null.
    #[serde(default, deserialize_with = "params::offset")]
    #[schemars(with = "Option<i64>", range(min = 0))]
    pub offset: Option<i64>,
}

pub(crate) fn validate(raw: &Value) -> AciResult<SearchAppsParams> {
    let request: SearchAppsRequest = params::parse(raw)?;
    Ok(SearchAppsParams {
        intent: request.intent,
        limit: params::bounded("limit", request.limit, MIN_LIMIT, Some(MAX_LIMIT))?,
        offset: params::bounded("offset", request.offset, 0, None)?,
        ..Default::default()
    })
}
