//! # aci_core
//!
//! Blocking client for the ACI tool catalog and function-call dispatch core.
//!
//! The entry point for LLM tool calls is
//! [`AciClient::handle_function_call`]: it recognises the four built-in meta
//! functions (see [`meta_functions`]), validates their arguments and calls the
//! matching resource client, and executes any other name directly as an
//! indexed function. Every HTTP outcome ends up as a typed result or an
//! [`AciError`].
//!
//! ```no_run
//! use aci_core::{AciClient, ClientConfig, FunctionCallOptions};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), aci_core::AciError> {
//! let client = AciClient::new(ClientConfig::new("my-api-key")?)?;
//! let apps = client.handle_function_call(
//!     "ACI_SEARCH_APPS",
//!     &json!({"intent": "send an email"}),
//!     "user-123",
//!     FunctionCallOptions::default(),
//! )?;
//! # let _ = apps;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod meta_functions;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::AciClient;
pub use config::ClientConfig;
pub use dispatch::{FunctionCall, FunctionCallOptions, FunctionCallOutput};
pub use error::{AciError, AciResult};
pub use meta_functions::MetaFunction;
pub use transport::RetryPolicy;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
