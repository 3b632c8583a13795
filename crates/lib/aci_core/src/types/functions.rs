//! Function catalog and execution types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AciError;

/// Tool-schema dialect requested when fetching a function definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceProvider {
    #[default]
    OpenAI,
    Anthropic,
}

impl InferenceProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            InferenceProvider::OpenAI => "openai",
            InferenceProvider::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for InferenceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InferenceProvider {
    type Err = AciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(InferenceProvider::OpenAI),
            "anthropic" => Ok(InferenceProvider::Anthropic),
            other => Err(AciError::invalid_field(
                "inference_provider",
                format!("unsupported provider '{other}' (expected 'openai' or 'anthropic')"),
            )),
        }
    }
}

/// A function as returned by function search.
///
/// Names follow `<APP_NAME>__<FUNCTION_NAME>`, e.g. `BRAVE_SEARCH__WEB_SEARCH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub description: String,
}

impl Function {
    /// App namespace prefix of the function name, if it follows the convention.
    pub fn app_name(&self) -> Option<&str> {
        self.name.split_once("__").map(|(app, _)| app)
    }
}

/// Function entry inside [`AppDetails`](super::AppDetails). Fields beyond
/// `name` and `description` are kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDetails {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query for `GET functions/search`. Unset fields are left off the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFunctionsParams {
    /// Restrict results to these apps; `None` searches every app.
    pub app_names: Option<Vec<String>>,
    pub intent: Option<String>,
    pub configured_only: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchFunctionsParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        for app_name in self.app_names.iter().flatten() {
            query.push(("app_names", app_name.clone()));
        }
        if let Some(intent) = &self.intent {
            query.push(("intent", intent.clone()));
        }
        if self.configured_only {
            query.push(("configured_only", "true".to_string()));
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

/// Outcome of running an indexed function on the remote executor.
///
/// `success == false` is a normal result (the third-party call failed), not a
/// transport error. The service populates exactly one of `data` / `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionExecutionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FunctionExecutionResult {
    pub fn succeeded(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
