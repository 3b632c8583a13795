//! Per-entity resource clients.
//!
//! Each method builds a request, sends it through the shared
//! [`HttpTransport`](crate::transport::HttpTransport) and decodes the JSON
//! payload into its declared type. Decode failures are
//! [`AciError::Deserialize`], never an empty default.

mod apps;
mod functions;

pub use apps::AppsResource;
pub use functions::FunctionsResource;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AciError, AciResult};

fn decode<T: DeserializeOwned>(body: Value) -> AciResult<T> {
    serde_json::from_value(body).map_err(AciError::from)
}

fn require_name(field: &str, value: &str) -> AciResult<()> {
    if value.trim().is_empty() {
        return Err(AciError::invalid_field(field, "must not be empty"));
    }
    Ok(())
}
