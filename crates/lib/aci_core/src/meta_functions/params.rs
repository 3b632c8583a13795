//! Deserialization helpers shared by the meta-function parameter types.
//!
//! Field helpers prefix their errors with the field name so a rejected call
//! says which argument was wrong. `null` counts as absent everywhere.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{AciError, AciResult};

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 1000;

/// Deserialize raw model-supplied arguments into `T`.
pub(crate) fn parse<T: DeserializeOwned>(raw: &Value) -> AciResult<T> {
    if !raw.is_object() {
        return Err(AciError::invalid_input("parameters must be a JSON object"));
    }
    T::deserialize(raw).map_err(|e| AciError::invalid_input(e.to_string()))
}

/// Range check for a coerced integer, naming `field` on failure.
pub(crate) fn bounded(
    field: &str,
    value: Option<i64>,
    minimum: u32,
    maximum: Option<u32>,
) -> AciResult<Option<u32>> {
    let Some(value) = value else {
        return Ok(None);
    };
    if value < i64::from(minimum) {
        return Err(AciError::invalid_field(
            field,
            format!("must be greater than or equal to {minimum}"),
        ));
    }
    let upper = maximum.unwrap_or(u32::MAX);
    if value > i64::from(upper) {
        return Err(AciError::invalid_field(
            field,
            format!("must be less than or equal to {upper}"),
        ));
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| AciError::invalid_field(field, "is out of range"))
}

/// Non-empty check for a required name.
pub(crate) fn non_empty(field: &str, value: String) -> AciResult<String> {
    if value.trim().is_empty() {
        return Err(AciError::invalid_field(field, "must not be empty"));
    }
    Ok(value)
}

fn named<'de, D, T>(deserializer: D, field: &str) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map_err(|e| D::Error::custom(format_args!("{field}: {e}")))
}

/// Integers, integral floats and numeric strings are accepted.
fn integer<'de, D>(deserializer: D, field: &str) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_integer(&value).map(Some).ok_or_else(|| {
            D::Error::custom(format_args!(
                "{field}: expected an integer, got {}",
                type_name(&value)
            ))
        }),
    }
}

pub(crate) fn intent<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    named(d, "intent")
}

/// An empty list is the same as an absent one.
pub(crate) fn app_names<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    let names: Option<Vec<String>> = named(d, "app_names")?;
    Ok(names.filter(|names| !names.is_empty()))
}

pub(crate) fn limit<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    integer(d, "limit")
}

pub(crate) fn offset<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    integer(d, "offset")
}

pub(crate) fn function_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    named(d, "function_name")
}

pub(crate) fn function_arguments<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Map<String, Value>, D::Error> {
    named(d, "function_arguments")
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else if n.as_u64().is_some() {
                Some(i64::MAX)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
