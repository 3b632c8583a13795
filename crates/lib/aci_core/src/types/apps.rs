//! App catalog types.

use serde::{Deserialize, Serialize};

use super::functions::{Function, FunctionDetails};

/// An app as returned by app search, ordered by relevance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    pub description: String,
    /// Present only when the search asked for functions to be included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<Function>>,
}

/// Full app record returned by `GET apps/{app_name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDetails {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub provider: String,
    pub version: String,
    pub description: String,
    pub logo: Option<String>,
    pub categories: Vec<String>,
    pub visibility: String,
    pub active: bool,
    pub security_schemes: Vec<String>,
    pub functions: Vec<FunctionDetails>,
}

/// Query for `GET apps/search`. Unset fields are left off the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAppsParams {
    /// Results are sorted by relevance to this text.
    pub intent: Option<String>,
    /// Only apps already configured for the caller's project.
    pub configured_only: bool,
    pub include_functions: bool,
    pub categories: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchAppsParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(intent) = &self.intent {
            query.push(("intent", intent.clone()));
        }
        if self.configured_only {
            query.push(("configured_only", "true".to_string()));
        }
        if self.include_functions {
            query.push(("include_functions", "true".to_string()));
        }
        for category in &self.categories {
            query.push(("categories", category.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        query
    }
}
