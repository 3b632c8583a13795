//! Wire types shared by the resource clients and the dispatcher.
//!
//! Field names match the remote service's JSON schema.

mod apps;
mod functions;

pub use apps::{App, AppDetails, SearchAppsParams};
pub use functions::{
    Function, FunctionDetails, FunctionExecutionResult, InferenceProvider, SearchFunctionsParams,
};
