//! CLI command definitions and dispatch.
//!
//! Each subcommand lives in its own submodule:
//! - `generate`: render the page from the API or a local corpus
//! - `catalog`: list the skin types a corpus offers
//! - `setup`: write a starter config file

mod catalog;
mod generate;
mod setup;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::{Builder, Runtime};

use crate::config::Config;

pub use catalog::cmd_skin_types;
pub use generate::{SessionRequest, Source, cmd_local, cmd_remote, run_session};
pub use setup::cmd_init_config;

/// Animal Cards CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API Ninjas key (or set API_NINJAS_KEY env var)
    #[arg(short, long, global = true, env = "API_NINJAS_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look animals up by name on API Ninjas and render the page (default)
    Remote(RemoteArgs),
    /// Render the page from a local JSON corpus
    Local(LocalArgs),
    /// List the skin types available for a corpus
    SkinTypes {
        /// Local corpus to inspect
        #[arg(long, conflicts_with = "name")]
        data: Option<PathBuf>,
        /// Animal name to look up remotely
        #[arg(long)]
        name: Option<String>,
    },
    /// Write a config file with the default settings, storing --api-key if given
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for remote runs
#[derive(Args, Debug, Clone, Default)]
pub struct RemoteArgs {
    /// Animal name; prompts when omitted
    #[arg(short, long)]
    pub name: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[command(flatten)]
    pub page: PageArgs,
}

/// Arguments for local runs
#[derive(Args, Debug, Clone, Default)]
pub struct LocalArgs {
    /// JSON corpus file
    #[arg(short, long)]
    pub data: Option<PathBuf>,
    #[command(flatten)]
    pub page: PageArgs,
}

/// Template, output and filter options shared by both sources
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Skin type filter ("All" for everything); prompts when omitted
    #[arg(short, long)]
    pub skin_type: Option<String>,
    /// HTML template containing __REPLACE_ANIMALS_INFO__
    #[arg(short, long)]
    pub template: Option<PathBuf>,
    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PageArgs {
    fn template(&self, config: &Config) -> PathBuf {
        self.template.clone().unwrap_or_else(|| config.paths.template.clone())
    }

    fn output(&self, config: &Config) -> PathBuf {
        self.output.clone().unwrap_or_else(|| config.paths.output.clone())
    }
}

/// Run the specified CLI command.
///
/// No subcommand means an interactive remote run with default settings.
/// The API key is a global argument, so every path sees `API_NINJAS_KEY`.
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let api_key = cli.api_key.as_deref();
    match &cli.command {
        None => cmd_remote(&runtime()?, config, api_key, &RemoteArgs::default()),
        Some(Commands::Remote(args)) => cmd_remote(&runtime()?, config, api_key, args),
        Some(Commands::Local(args)) => cmd_local(&runtime()?, config, args),
        Some(Commands::SkinTypes { data, name }) => cmd_skin_types(
            &runtime()?,
            config,
            data.as_deref(),
            name.as_deref(),
            api_key,
        ),
        Some(Commands::InitConfig { force }) => cmd_init_config(api_key, *force),
    }
}

/// Single-threaded runtime; the only async work is one HTTP request.
fn runtime() -> anyhow::Result<Runtime> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::generate::resolve_api_key;
    use crate::animals::AnimalError;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["animal-cards"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_remote() {
        let cli = Cli::try_parse_from([
            "animal-cards",
            "remote",
            "--api-key",
            "k",
            "--name",
            "fox",
            "--skin-type",
            "Fur",
            "-o",
            "out.html",
        ])
        .unwrap();
        let Some(Commands::Remote(args)) = &cli.command else {
            panic!("expected remote");
        };
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(args.name.as_deref(), Some("fox"));
        assert_eq!(args.page.skin_type.as_deref(), Some("Fur"));
        assert_eq!(args.page.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn test_parse_local() {
        let cli = Cli::try_parse_from(["animal-cards", "local", "--data", "animals_data.json"]).unwrap();
        let Some(Commands::Local(args)) = cli.command else {
            panic!("expected local");
        };
        assert_eq!(args.data, Some(PathBuf::from("animals_data.json")));
        assert!(args.page.skin_type.is_none());
    }

    #[test]
    fn test_skin_types_data_conflicts_with_name() {
        let result = Cli::try_parse_from([
            "animal-cards",
            "skin-types",
            "--data",
            "a.json",
            "--name",
            "fox",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_args_fall_back_to_config() {
        let config = Config::default();
        let args = PageArgs {
            output: Some(PathBuf::from("custom.html")),
            ..Default::default()
        };
        assert_eq!(args.template(&config), PathBuf::from("animals_template.html"));
        assert_eq!(args.output(&config), PathBuf::from("custom.html"));
    }

    #[test]
    fn test_api_key_accepted_before_subcommand() {
        let cli = Cli::try_parse_from(["animal-cards", "--api-key", "k", "skin-types", "--name", "fox"])
            .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(matches!(cli.command, Some(Commands::SkinTypes { .. })));
    }

    #[test]
    fn test_api_key_sources() {
        // SAFETY: this is the only test that writes API_NINJAS_KEY; the other
        // parsing tests pass --api-key explicitly or never look at the key.
        unsafe { std::env::set_var("API_NINJAS_KEY", "env-key") };

        let mut config = Config::default();
        config.credentials.api_ninjas_key = Some("config-key".into());

        // Default run (no subcommand) sees the environment
        let cli = Cli::try_parse_from(["animal-cards"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.api_key.as_deref(), Some("env-key"));
        assert_eq!(resolve_api_key(cli.api_key.as_deref(), &Config::default()).unwrap(), "env-key");

        // Environment beats the config file
        assert_eq!(resolve_api_key(cli.api_key.as_deref(), &config).unwrap(), "env-key");

        // Flag beats the environment
        let cli = Cli::try_parse_from(["animal-cards", "remote", "--api-key", "flag-key"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("flag-key"));

        unsafe { std::env::remove_var("API_NINJAS_KEY") };

        // Config file when neither flag nor environment is set
        let cli = Cli::try_parse_from(["animal-cards"]).unwrap();
        assert!(cli.api_key.is_none());
        assert_eq!(resolve_api_key(cli.api_key.as_deref(), &config).unwrap(), "config-key");
        assert!(matches!(
            resolve_api_key(None, &Config::default()),
            Err(AnimalError::MissingApiKey)
        ));
    }
}
