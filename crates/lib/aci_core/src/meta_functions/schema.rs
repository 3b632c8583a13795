//! JSON Schema rendering for meta-function parameter types.

use schemars::{JsonSchema, Schema, schema_for};
use serde_json::Value;

/// Strict tool-calling shape: every property listed in `required`, no extra
/// properties. Optional fields stay nullable through their `Option` type.
///
/// Applied with `#[schemars(transform = strict_parameters)]`.
pub fn strict_parameters(schema: &mut Schema) {
    let Some(object) = schema.as_object_mut() else {
        return;
    };
    let mut required = Vec::new();
    if let Some(Value::Object(properties)) = object.get_mut("properties") {
        for (name, property) in properties.iter_mut() {
            required.push(Value::String(name.clone()));
            if let Value::Object(property) = property {
                property.remove("format");
                if property.get("default") == Some(&Value::Null) {
                    property.remove("default");
                }
            }
        }
    }
    object.insert("required".to_string(), Value::Array(required));
    object.insert("additionalProperties".to_string(), Value::Bool(false));
}

/// Parameters schema of `T`, without the document-level keywords.
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let mut schema = schema_for!(T).to_value();
    if let Value::Object(object) = &mut schema {
        for keyword in ["$schema", "title", "description"] {
            object.remove(keyword);
        }
    }
    schema
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Doc comments become descriptions.
    #[derive(JsonSchema)]
    #[schemars(transform = strict_parameters)]
    #[allow(dead_code)]
    struct Sample {
        /// Name to look up.
        name: String,
        /// Page size.
        #[schemars(range(min = 1, max = 50))]
        size: Option<u32>,
    }

    #[test]
    fn every_property_is_required() {
        let schema = parameters_schema::<Sample>();
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .expect("required")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        required.sort_unstable();
        assert_eq!(required, vec!["name", "size"]);
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["type"], json!("object"));
    }

    #[test]
    fn document_keywords_are_dropped() {
        let schema = parameters_schema::<Sample>();
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
        assert!(schema.get("description").is_none());
    }

    #[test]
    fn optional_fields_are_nullable_and_bounded() {
        let schema = parameters_schema::<Sample>();
        let size = &schema["properties"]["size"];
        assert_eq!(size["type"], json!(["integer", "null"]));
        assert_eq!(size["minimum"], json!(1));
        assert_eq!(size["maximum"], json!(50));
        assert_eq!(size["description"], json!("Page size."));
        assert!(size.get("format").is_none());
        assert_eq!(schema["properties"]["name"]["type"], json!("string"));
    }
}
