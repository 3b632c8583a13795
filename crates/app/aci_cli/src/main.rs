// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use aci_core::meta_functions::tool_schemas;
use aci_core::types::{SearchAppsParams, SearchFunctionsParams};
use aci_core::{AciClient, ClientConfig, FunctionCallOptions, RetryPolicy};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use serde_json::{Map, Value};

mod cli;
mod logging;

fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Tools { provider } => return print_json(&tool_schemas(provider)),
        _ => {}
    }

    let retry = RetryPolicy {
        max_attempts: args.max_attempts,
        ..RetryPolicy::default()
    };
    let config =
        ClientConfig::resolve(args.api_key, args.base_url.as_deref())?.with_retry(retry);
    let client = AciClient::new(config)?;

    match args.command {
        Commands::SearchApps(search) => {
            let params = SearchAppsParams {
                intent: search.intent,
                configured_only: search.configured_only,
                include_functions: search.include_functions,
                categories: search.categories,
                limit: search.limit,
                offset: search.offset,
            };
            print_json(&client.apps().search(&params)?)?;
        }
        Commands::GetApp { app_name } => print_json(&client.apps().get(&app_name)?)?,
        Commands::SearchFunctions(search) => {
            let params = SearchFunctionsParams {
                app_names: (!search.app_names.is_empty()).then_some(search.app_names),
                intent: search.intent,
                configured_only: search.configured_only,
                limit: search.limit,
                offset: search.offset,
            };
            print_json(&client.functions().search(&params)?)?;
        }
        Commands::GetDefinition {
            function_name,
            provider,
        } => print_json(&client.functions().get_definition(&function_name, provider)?)?,
        Commands::Execute {
            function_name,
            owner,
            args,
        } => {
            let arguments = parse_object("--args", &args)?;
            print_json(&client.functions().execute(&function_name, &arguments, &owner)?)?;
        }
        Commands::Call {
            name,
            owner,
            params,
            configured_only,
            provider,
        } => {
            let parameters: Value = serde_json::from_str(&params)?;
            let options = FunctionCallOptions {
                configured_only,
                inference_provider: provider,
            };
            print_json(&client.handle_function_call(&name, &parameters, &owner, options)?)?;
        }
        Commands::Tools { .. } | Commands::Version => {}
    }

    client.close();
    Ok(())
}

fn parse_object(flag: &str, raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Custom(format!("{flag} must be a JSON object"))),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_must_be_an_object() {
        assert_eq!(parse_object("--args", r#"{"q": 1}"#).expect("object").len(), 1);
        let err = parse_object("--args", "[1]").expect_err("array");
        assert!(err.to_string().contains("--args must be a JSON object"));
        assert!(matches!(parse_object("--args", "{"), Err(Error::Json(_))));
    }
}
