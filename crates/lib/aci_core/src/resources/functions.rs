//! Functions resource client.

use serde_json::{Map, Value, json};
use tracing::info;

use super::{decode, require_name};
use crate::error::AciResult;
use crate::transport::HttpTransport;
use crate::types::{Function, FunctionExecutionResult, InferenceProvider, SearchFunctionsParams};

/// Requests against `functions/*`. Borrowed from
/// [`AciClient::functions`](crate::AciClient::functions).
#[derive(Debug, Clone, Copy)]
pub struct FunctionsResource<'a> {
    transport: &'a HttpTransport,
}

impl<'a> FunctionsResource<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Search functions, optionally restricted to a set of apps.
    pub fn search(&self, params: &SearchFunctionsParams) -> AciResult<Vec<Function>> {
        let query = params.to_query();
        info!(?query, "searching functions");
        let body = self.transport.get(&["functions", "search"], &query)?;
        decode(body)
    }

    /// Fetch the tool schema of `function_name` rendered for `provider`.
    ///
    /// The document is returned exactly as the service rendered it.
    pub fn get_definition(
        &self,
        function_name: &str,
        provider: InferenceProvider,
    ) -> AciResult<Value> {
        require_name("function_name", function_name)?;
        info!(function_name, %provider, "getting function definition");
        self.transport.get(
            &["functions", function_name, "definition"],
            &[("inference_provider", provider.as_str().to_string())],
        )
    }

    /// Run `function_name` with the credentials linked to
    /// `linked_account_owner_id`.
    ///
    /// A failed third-party call comes back as `Ok` with `success == false`.
    pub fn execute(
        &self,
        function_name: &str,
        function_arguments: &Map<String, Value>,
        linked_account_owner_id: &str,
    ) -> AciResult<FunctionExecutionResult> {
        require_name("function_name", function_name)?;
        info!(
            function_name,
            linked_account_owner_id,
            argument_count = function_arguments.len(),
            "executing function"
        );
        let body = json!({
            "function_input": function_arguments,
            "linked_account_owner_id": linked_account_owner_id,
        });
        let response = self
            .transport
            .post(&["functions", function_name, "execute"], &body)?;
        decode(response)
    }
}
