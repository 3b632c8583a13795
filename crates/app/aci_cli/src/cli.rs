use aci_core::config::{API_KEY_ENV, BASE_URL_ENV};
use aci_core::transport::DEFAULT_MAX_ATTEMPTS;
use aci_core::types::InferenceProvider;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aci", about = "Search, inspect and execute ACI functions", version)]
pub struct Cli {
    /// API key sent as `x-api-key`.
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Service endpoint. Defaults to the public ACI API.
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Attempts per request, including the first.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search apps by intent.
    SearchApps(SearchAppsArgs),

    /// Show one app with its functions.
    GetApp {
        app_name: String,
    },

    /// Search functions by intent, optionally within some apps.
    SearchFunctions(SearchFunctionsArgs),

    /// Print the tool definition of a function.
    GetDefinition {
        function_name: String,

        #[arg(long, default_value_t = InferenceProvider::OpenAI)]
        provider: InferenceProvider,
    },

    /// Execute a function with JSON arguments.
    Execute {
        function_name: String,

        /// Whose linked account credentials to use.
        #[arg(long)]
        owner: String,

        /// Function arguments as a JSON object.
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Dispatch an LLM function call (meta function or indexed function).
    Call {
        name: String,

        #[arg(long)]
        owner: String,

        /// Call parameters as produced by the model, in JSON.
        #[arg(long, default_value = "{}")]
        params: String,

        #[arg(long)]
        configured_only: bool,

        #[arg(long, default_value_t = InferenceProvider::OpenAI)]
        provider: InferenceProvider,
    },

    /// Print the meta-function tool schemas.
    Tools {
        #[arg(long, default_value_t = InferenceProvider::OpenAI)]
        provider: InferenceProvider,
    },

    /// Print version information.
    Version,
}

#[derive(Args, Debug)]
pub struct SearchAppsArgs {
    #[arg(long)]
    pub intent: Option<String>,

    #[arg(long)]
    pub configured_only: bool,

    #[arg(long)]
    pub include_functions: bool,

    /// Repeat to filter on several categories.
    #[arg(long = "category")]
    pub categories: Vec<String>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Args, Debug)]
pub struct SearchFunctionsArgs {
    /// Repeat to search several apps.
    #[arg(long = "app")]
    pub app_names: Vec<String>,

    #[arg(long)]
    pub intent: Option<String>,

    #[arg(long)]
    pub configured_only: bool,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn call_arguments_parse() {
        let cli = Cli::try_parse_from([
            "aci",
            "--api-key",
            "k",
            "call",
            "ACI_SEARCH_APPS",
            "--owner",
            "user-1",
            "--params",
            r#"{"intent":"email"}"#,
            "--provider",
            "anthropic",
        ])
        .expect("parse");
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Commands::Call {
                name,
                owner,
                provider,
                configured_only,
                ..
            } => {
                assert_eq!(name, "ACI_SEARCH_APPS");
                assert_eq!(owner, "user-1");
                assert_eq!(provider, InferenceProvider::Anthropic);
                assert!(!configured_only);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_attempts_are_rejected() {
        assert!(Cli::try_parse_from(["aci", "--max-attempts", "0", "version"]).is_err());
    }

    #[test]
    fn repeated_filters_collect() {
        let cli = Cli::try_parse_from([
            "aci",
            "search-functions",
            "--app",
            "GMAIL",
            "--app",
            "SLACK",
            "--limit",
            "5",
        ])
        .expect("parse");
        match cli.command {
            Commands::SearchFunctions(args) => {
                assert_eq!(args.app_names, vec!["GMAIL", "SLACK"]);
                assert_eq!(args.limit, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
