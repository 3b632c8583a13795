//! `ACI_EXECUTE_FUNCTION`: lets the model run a function it found through
//! search, passing the arguments nested under `function_arguments`.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::params;
use super::schema::strict_parameters;
use crate::error::AciResult;

pub const NAME: &str = "ACI_EXECUTE_FUNCTION";
pub const LEGACY_NAME: &str = "AIPOLABS_EXECUTE_FUNCTION";

/// Key of the nested arguments object.
pub const ARGUMENTS_KEY: &str = "function_arguments";
/// Older name for [`ARGUMENTS_KEY`], still accepted on input.
pub const LEGACY_ARGUMENTS_KEY: &str = "function_input";

const FUNCTION_NAME_KEY: &str = "function_name";

pub const DESCRIPTION: &str = "Execute a function by name. Get its definition with \
    ACI_GET_FUNCTION_DEFINITION first and pass the arguments it declares.";

/// Parameters for the `ACI_EXECUTE_FUNCTION` meta function.
///
/// Extra top-level keys next to the arguments object are rejected, as is
/// passing both the current and the legacy arguments key.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(transform = strict_parameters)]
pub struct ExecuteFunctionParams {
    /// Name of the function to execute, as returned by
    /// ACI_GET_FUNCTION_DEFINITION.
    #[serde(deserialize_with = "params::function_name")]
    #[schemars(with = "String")]
    pub function_name: String,
    /// Arguments for the function, as declared in its definition. Use an
    /// empty object if the function takes no arguments.
    #[serde(alias = "function_input", deserialize_with = "params::function_arguments")]
    #[schemars(with = "Map<String, Value>")]
    pub function_arguments: Map<String, Value>,
}

/// Wrap top-level arguments that a caller flattened instead of nesting.
///
/// When `raw` is an object with neither [`ARGUMENTS_KEY`] nor
/// [`LEGACY_ARGUMENTS_KEY`], every key except `function_name` is moved into a
/// new `function_arguments` object (empty if there are none). Any other input
/// is returned unchanged and left for [`validate`] to judge.
pub fn repair_parameter_shape(raw: &Value) -> Value {
    let Some(params) = raw.as_object() else {
        return raw.clone();
    };
    if params.contains_key(ARGUMENTS_KEY) || params.contains_key(LEGACY_ARGUMENTS_KEY) {
        return raw.clone();
    }

    let mut repaired = Map::new();
    let mut arguments = Map::new();
    for (key, value) in params {
        if key == FUNCTION_NAME_KEY {
            repaired.insert(key.clone(), value.clone());
        } else {
            arguments.insert(key.clone(), value.clone());
        }
    }
    repaired.insert(ARGUMENTS_KEY.to_string(), Value::Object(arguments));
    Value::Object(repaired)
}

pub(crate) fn validate(raw: &Value) -> AciResult<ExecuteFunctionParams> {
    let request: ExecuteFunctionParams = params::parse(raw)?;
    Ok(ExecuteFunctionParams {
        function_name: params::non_empty(FUNCTION_NAME_KEY, request.function_name)?,
        ..request
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flattened_arguments_are_wrapped() {
        let repaired = repair_parameter_shape(&json!({"function_name": "F", "x": 1, "y": 2}));
        assert_eq!(
            repaired,
            json!({"function_name": "F", "function_arguments": {"x": 1, "y": 2}})
        );
        let params = validate(&repaired).expect("valid");
        assert_eq!(params.function_name, "F");
        assert_eq!(Value::Object(params.function_arguments), json!({"x": 1, "y": 2}));
    }

    #[test]
    fn name_only_gets_empty_arguments() {
        let repaired = repair_parameter_shape(&json!({"function_name": "F"}));
        assert_eq!(repaired, json!({"function_name": "F", "function_arguments": {}}));
    }

    #[test]
    fn nested_arguments_are_left_alone() {
        let raw = json!({"function_name": "F", "function_arguments": {"x": 1}});
        assert_eq!(repair_parameter_shape(&raw), raw);
        let legacy = json!({"function_name": "F", "function_input": {"x": 1}});
        assert_eq!(repair_parameter_shape(&legacy), legacy);
    }

    #[test]
    fn legacy_wrapper_is_accepted() {
        let params =
            validate(&json!({"function_name": "F", "function_input": {"param1": "value1"}}))
                .expect("valid");
        assert_eq!(params.function_arguments["param1"], json!("value1"));
    }

    #[test]
    fn wrapper_plus_extra_keys_is_ambiguous() {
        let raw = json!({"function_name": "F", "function_arguments": {"x": 1}, "y": 2});
        let err = validate(&repair_parameter_shape(&raw)).expect_err("ambiguous");
        assert!(err.to_string().contains("unknown field `y`"));
    }

    #[test]
    fn both_wrappers_are_ambiguous() {
        let raw = json!({"function_name": "F", "function_arguments": {}, "function_input": {}});
        let err = validate(&repair_parameter_shape(&raw)).expect_err("ambiguous");
        assert!(err.to_string().contains("duplicate field `function_arguments`"));
    }

    #[test]
    fn wrapper_must_be_an_object() {
        let err = validate(&json!({"function_name": "F", "function_arguments": "x=1"}))
            .expect_err("string");
        assert!(err.to_string().contains("function_arguments"));
        assert!(validate(&json!({"function_name": "F", "function_arguments": null})).is_err());
    }

    #[test]
    fn missing_function_name_still_fails_after_repair() {
        let err = validate(&repair_parameter_shape(&json!({"x": 1}))).expect_err("no name");
        assert!(err.to_string().contains("function_name"));
    }
}
