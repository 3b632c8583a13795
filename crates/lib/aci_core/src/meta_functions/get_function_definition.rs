//! `ACI_GET_FUNCTION_DEFINITION`: lets the model read a function's input
//! schema before calling it.
//!
//! The inference provider is chosen by the application, not the model, so it
//! is not part of the declared parameters.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::params;
use super::schema::strict_parameters;
use crate::error::AciResult;

pub const NAME: &str = "ACI_GET_FUNCTION_DEFINITION";
pub const LEGACY_NAME: &str = "AIPOLABS_GET_FUNCTION_DEFINITION";

pub const DESCRIPTION: &str = "Get the definition of a function, including the arguments it \
    expects. Call this before executing a function found with ACI_SEARCH_FUNCTIONS.";

/// Parameters for the `ACI_GET_FUNCTION_DEFINITION` meta function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[schemars(transform = strict_parameters)]
pub struct GetFunctionDefinitionParams {
    /// Name of the function, e.g. BRAVE_SEARCH__WEB_SEARCH.
    #[serde(deserialize_with = "params::function_name")]
    #[schemars(with = "String")]
    pub function_name: String,
}

pub(crate) fn validate(raw: &Value) -> AciResult<GetFunctionDefinitionParams> {
    let request: GetFunctionDefinitionParams = params::parse(raw)?;
    Ok(GetFunctionDefinitionParams {
        function_name: params::non_empty("function_name", request.function_name)?,
    })
}
