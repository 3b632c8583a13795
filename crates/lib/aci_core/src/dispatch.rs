//! Function-call dispatch.
//!
//! [`AciClient::handle_function_call`] takes the `(name, arguments)` pair an
//! LLM produced for a tool call and routes it:
//!
//! 1. meta function names are validated and sent to the matching resource
//!    client;
//! 2. every other name is executed directly as an indexed function.
//!
//! Errors are never converted into results; a failed third-party execution
//! (`success == false`) is returned as data.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::client::AciClient;
use crate::error::{AciError, AciResult};
use crate::meta_functions::{MetaFunction, ValidatedParams, repair_parameter_shape};
use crate::types::{App, Function, FunctionExecutionResult, InferenceProvider};

/// Caller-side options that the model does not control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunctionCallOptions {
    /// Restrict searches to apps/functions configured for the caller's
    /// project. Has no effect on execution.
    pub configured_only: bool,
    /// Dialect of definitions returned by `ACI_GET_FUNCTION_DEFINITION`.
    pub inference_provider: InferenceProvider,
}

/// Routing decision for a call name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCall<'a> {
    Meta(MetaFunction),
    /// Indexed function executed by name.
    Direct(&'a str),
}

impl<'a> FunctionCall<'a> {
    pub fn classify(name: &'a str) -> Self {
        match MetaFunction::from_name(name) {
            Some(meta) => FunctionCall::Meta(meta),
            None => FunctionCall::Direct(name),
        }
    }
}

/// Result of a dispatched call. Serializes to the plain JSON form of the
/// inner value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FunctionCallOutput {
    Apps(Vec<App>),
    Functions(Vec<Function>),
    /// Tool schema document, passed through as rendered by the service.
    Definition(Value),
    Execution(FunctionExecutionResult),
}

impl AciClient {
    /// Route one LLM function call.
    ///
    /// `linked_account_owner_id` selects whose linked credentials the remote
    /// executor uses; it is forwarded as-is.
    pub fn handle_function_call(
        &self,
        name: &str,
        parameters: &Value,
        linked_account_owner_id: &str,
        options: FunctionCallOptions,
    ) -> AciResult<FunctionCallOutput> {
        info!(name, configured_only = options.configured_only, "handling function call");
        match FunctionCall::classify(name) {
            FunctionCall::Meta(meta) => {
                self.handle_meta_function(meta, parameters, linked_account_owner_id, options)
            }
            FunctionCall::Direct(function_name) => {
                let arguments = direct_arguments(function_name, parameters)?;
                let result = self.functions().execute(
                    function_name,
                    &arguments,
                    linked_account_owner_id,
                )?;
                Ok(FunctionCallOutput::Execution(result))
            }
        }
    }

    fn handle_meta_function(
        &self,
        meta: MetaFunction,
        parameters: &Value,
        linked_account_owner_id: &str,
        options: FunctionCallOptions,
    ) -> AciResult<FunctionCallOutput> {
        let repaired;
        let raw = if meta == MetaFunction::ExecuteFunction {
            repaired = repair_parameter_shape(parameters);
            &repaired
        } else {
            parameters
        };

        match meta.validate(raw)? {
            ValidatedParams::SearchApps(mut params) => {
                params.configured_only = options.configured_only;
                Ok(FunctionCallOutput::Apps(self.apps().search(&params)?))
            }
            ValidatedParams::SearchFunctions(mut params) => {
                params.configured_only = options.configured_only;
                Ok(FunctionCallOutput::Functions(self.functions().search(&params)?))
            }
            ValidatedParams::GetFunctionDefinition(params) => {
                Ok(FunctionCallOutput::Definition(self.functions().get_definition(
                    &params.function_name,
                    options.inference_provider,
                )?))
            }
            ValidatedParams::ExecuteFunction(params) => {
                Ok(FunctionCallOutput::Execution(self.functions().execute(
                    &params.function_name,
                    &params.function_arguments,
                    linked_account_owner_id,
                )?))
            }
        }
    }
}

/// Arguments of a direct call must be an object; `null` means no arguments.
fn direct_arguments(function_name: &str, parameters: &Value) -> AciResult<Map<String, Value>> {
    match parameters {
        Value::Object(arguments) => Ok(arguments.clone()),
        Value::Null => Ok(Map::new()),
        _ => Err(AciError::invalid_input(format!(
            "arguments for '{function_name}' must be a JSON object"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ClientConfig;
    use crate::transport::RetryPolicy;

    fn offline_client() -> AciClient {
        // Port 9 (discard) on localhost; tests here must fail before any I/O.
        let config = ClientConfig::new("test_api_key")
            .and_then(|c| c.with_base_url("http://127.0.0.1:9/v1/"))
            .map(|c| c.with_retry(RetryPolicy::without_backoff(1)))
            .expect("config");
        AciClient::new(config).expect("client")
    }

    #[test]
    fn meta_names_are_classified() {
        assert_eq!(
            FunctionCall::classify("ACI_SEARCH_APPS"),
            FunctionCall::Meta(MetaFunction::SearchApps)
        );
        assert_eq!(
            FunctionCall::classify("AIPOLABS_GET_FUNCTION_DEFINITION"),
            FunctionCall::Meta(MetaFunction::GetFunctionDefinition)
        );
    }

    #[test]
    fn unknown_names_are_direct_executions() {
        assert_eq!(
            FunctionCall::classify("BRAVE_SEARCH__WEB_SEARCH"),
            FunctionCall::Direct("BRAVE_SEARCH__WEB_SEARCH")
        );
        assert_eq!(FunctionCall::classify(""), FunctionCall::Direct(""));
    }

    #[test]
    fn direct_arguments_shapes() {
        assert_eq!(
            direct_arguments("F", &json!({"query": "test"})).expect("object"),
            json!({"query": "test"}).as_object().cloned().expect("map")
        );
        assert!(direct_arguments("F", &Value::Null).expect("null").is_empty());
        assert!(direct_arguments("F", &json!([1, 2])).is_err());
    }

    #[test]
    fn invalid_meta_parameters_fail_before_any_request() {
        let client = offline_client();
        let err = client
            .handle_function_call(
                "ACI_SEARCH_APPS",
                &json!({"limit": 0}),
                "owner",
                FunctionCallOptions::default(),
            )
            .expect_err("limit below minimum");
        assert!(matches!(err, AciError::Validation { status_code: None, .. }));
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn output_serializes_to_plain_form() {
        let output = FunctionCallOutput::Execution(FunctionExecutionResult::succeeded(json!(
            "string"
        )));
        assert_eq!(
            serde_json::to_value(&output).expect("serialize"),
            json!({"success": true, "data": "string"})
        );
        let output = FunctionCallOutput::Apps(vec![App {
            name: "Test App".into(),
            description: "Test Description".into(),
            functions: None,
        }]);
        assert_eq!(
            serde_json::to_value(&output).expect("serialize"),
            json!([{"name": "Test App", "description": "Test Description"}])
        );
    }
}
