//! Built-in meta functions.
//!
//! A meta function is one of the four fixed operations a model can call to
//! explore and use the catalog: search apps, search functions, get a function
//! definition, execute a function. Each has a stable wire name, a parameter
//! type deriving `Deserialize` and `JsonSchema` whose schema can be handed to
//! an LLM as a tool, and a pure validator producing typed parameters.
//!
//! Names outside this set are not errors: the dispatcher treats them as
//! indexed functions and executes them directly.

pub mod execute_function;
pub mod get_function_definition;
mod params;
pub mod schema;
pub mod search_apps;
pub mod search_functions;

use serde_json::{Value, json};

use crate::error::AciResult;
use crate::types::{InferenceProvider, SearchAppsParams, SearchFunctionsParams};

pub use execute_function::{ExecuteFunctionParams, repair_parameter_shape};
pub use get_function_definition::GetFunctionDefinitionParams;
pub use params::{MAX_LIMIT, MIN_LIMIT};
pub use search_apps::SearchAppsRequest;
pub use search_functions::SearchFunctionsRequest;

/// The closed set of meta functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaFunction {
    SearchApps,
    SearchFunctions,
    GetFunctionDefinition,
    ExecuteFunction,
}

/// Parameters accepted by one meta function's validator.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedParams {
    SearchApps(SearchAppsParams),
    SearchFunctions(SearchFunctionsParams),
    GetFunctionDefinition(GetFunctionDefinitionParams),
    ExecuteFunction(ExecuteFunctionParams),
}

impl MetaFunction {
    pub const ALL: [MetaFunction; 4] = [
        MetaFunction::SearchApps,
        MetaFunction::SearchFunctions,
        MetaFunction::GetFunctionDefinition,
        MetaFunction::ExecuteFunction,
    ];

    /// Look up a meta function by wire name, accepting legacy aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            search_apps::NAME | search_apps::LEGACY_NAME => Some(MetaFunction::SearchApps),
            search_functions::NAME | search_functions::LEGACY_NAME => {
                Some(MetaFunction::SearchFunctions)
            }
            get_function_definition::NAME | get_function_definition::LEGACY_NAME => {
                Some(MetaFunction::GetFunctionDefinition)
            }
            execute_function::NAME | execute_function::LEGACY_NAME => {
                Some(MetaFunction::ExecuteFunction)
            }
            _ => None,
        }
    }

    /// Canonical wire name.
    pub fn name(self) -> &'static str {
        match self {
            MetaFunction::SearchApps => search_apps::NAME,
            MetaFunction::SearchFunctions => search_functions::NAME,
            MetaFunction::GetFunctionDefinition => get_function_definition::NAME,
            MetaFunction::ExecuteFunction => execute_function::NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MetaFunction::SearchApps => search_apps::DESCRIPTION,
            MetaFunction::SearchFunctions => search_functions::DESCRIPTION,
            MetaFunction::GetFunctionDefinition => get_function_definition::DESCRIPTION,
            MetaFunction::ExecuteFunction => execute_function::DESCRIPTION,
        }
    }

    /// JSON Schema of the parameters object.
    pub fn parameters_schema(self) -> Value {
        match self {
            MetaFunction::SearchApps => schema::parameters_schema::<SearchAppsRequest>(),
            MetaFunction::SearchFunctions => schema::parameters_schema::<SearchFunctionsRequest>(),
            MetaFunction::GetFunctionDefinition => {
                schema::parameters_schema::<GetFunctionDefinitionParams>()
            }
            MetaFunction::ExecuteFunction => schema::parameters_schema::<ExecuteFunctionParams>(),
        }
    }

    /// Tool descriptor in the dialect of `provider`.
    pub fn tool_schema(self, provider: InferenceProvider) -> Value {
        match provider {
            InferenceProvider::OpenAI => json!({
                "type": "function",
                "function": {
                    "name": self.name(),
                    "description": self.description(),
                    "parameters": self.parameters_schema(),
                },
            }),
            InferenceProvider::Anthropic => json!({
                "name": self.name(),
                "description": self.description(),
                "input_schema": self.parameters_schema(),
            }),
        }
    }

    /// Validate raw model-supplied arguments. Pure; never touches the network.
    pub fn validate(self, raw: &Value) -> AciResult<ValidatedParams> {
        Ok(match self {
            MetaFunction::SearchApps => ValidatedParams::SearchApps(search_apps::validate(raw)?),
            MetaFunction::SearchFunctions => {
                ValidatedParams::SearchFunctions(search_functions::validate(raw)?)
            }
            MetaFunction::GetFunctionDefinition => {
                ValidatedParams::GetFunctionDefinition(get_function_definition::validate(raw)?)
            }
            MetaFunction::ExecuteFunction => {
                ValidatedParams::ExecuteFunction(execute_function::validate(raw)?)
            }
        })
    }
}

/// Tool descriptors of every meta function, ready to pass to an LLM.
pub fn tool_schemas(provider: InferenceProvider) -> Vec<Value> {
    MetaFunction::ALL
        .iter()
        .map(|meta| meta.tool_schema(provider))
        .collect()
}
