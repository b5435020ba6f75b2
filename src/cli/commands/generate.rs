//! Page generation commands.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Runtime;

use crate::animals::{
    self, AnimalError, AnimalService, AnimalSource, GenerateReport, LocalCorpus, NinjasClient,
    NinjasConfig, Query, SkinTypeCatalog, SkinTypeFilter,
};
use crate::cli::prompt;
use crate::config::Config;
use crate::error::Error;

use super::{LocalArgs, RemoteArgs};

/// Where the records for a session come from
#[derive(Debug, Clone)]
pub enum Source {
    /// Name lookup; prompts for the name when `None`
    Remote { name: Option<String> },
    /// Whole local corpus
    Local,
}

/// Everything a session needs besides the data source itself
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub source: Source,
    /// Prompts when `None`
    pub skin_type: Option<String>,
    pub template: PathBuf,
    pub output: PathBuf,
}

/// Look animals up on API Ninjas and render the page
pub fn cmd_remote(
    rt: &Runtime,
    config: &Config,
    api_key: Option<&str>,
    args: &RemoteArgs,
) -> anyhow::Result<()> {
    let client = ninjas_client(config, api_key, args.timeout_secs)?;
    let request = SessionRequest {
        source: Source::Remote {
            name: args.name.clone(),
        },
        skin_type: args.page.skin_type.clone(),
        template: args.page.template(config),
        output: args.page.output(config),
    };
    run_interactive(rt, &AnimalService::new(client), &request)
}

/// Render the page from a local JSON corpus
pub fn cmd_local(rt: &Runtime, config: &Config, args: &LocalArgs) -> anyhow::Result<()> {
    let data = args.data.clone().unwrap_or_else(|| config.paths.data.clone());
    let request = SessionRequest {
        source: Source::Local,
        skin_type: args.page.skin_type.clone(),
        template: args.page.template(config),
        output: args.page.output(config),
    };
    run_interactive(rt, &AnimalService::new(LocalCorpus::new(data)), &request)
}

/// Pick the API key: `--api-key` or `API_NINJAS_KEY` (clap merges the two,
/// flag first), then the config file.
pub(super) fn resolve_api_key(api_key: Option<&str>, config: &Config) -> Result<String, AnimalError> {
    api_key
        .map(str::to_string)
        .or_else(|| config.credentials.api_ninjas_key.clone())
        .ok_or(AnimalError::MissingApiKey)
}

/// Build the API client from flags, falling back to the config file.
pub(super) fn ninjas_client(
    config: &Config,
    api_key: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<NinjasClient, AnimalError> {
    NinjasClient::new(NinjasConfig {
        api_key: resolve_api_key(api_key, config)?,
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_secs(timeout_secs.unwrap_or(config.api.timeout_secs)),
    })
}

fn run_interactive<S: AnimalSource>(
    rt: &Runtime,
    service: &AnimalService<S>,
    request: &SessionRequest,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let report = run_session(rt, service, request, &mut input, &mut output)?;

    writeln!(output, "The HTML file has been generated.")?;
    writeln!(output, ">>> {}", report.output.display())?;
    Ok(())
}

/// One full run: resolve the query, fetch once, pick a filter, write the page.
///
/// Values given up front are validated like prompt answers, but a bad one
/// is fatal instead of re-prompting.
pub fn run_session<S, R, W>(
    rt: &Runtime,
    service: &AnimalService<S>,
    request: &SessionRequest,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<GenerateReport>
where
    S: AnimalSource,
    R: BufRead,
    W: Write,
{
    let query = match &request.source {
        Source::Local => Query::Everything,
        Source::Remote { name: Some(name) } => {
            if !prompt::is_valid_animal_name(name) {
                return Err(Error::invalid_input(format!(
                    "animal name {name:?} must be letters only"
                ))
                .into());
            }
            Query::Name(name.clone())
        }
        Source::Remote { name: None } => Query::Name(prompt::ask_animal_name(input, output)?),
    };

    let corpus = rt.block_on(service.fetch(query))?;
    let catalog = corpus.catalog();

    let filter = match &request.skin_type {
        Some(skin_type) => parse_filter_arg(&catalog, skin_type)?,
        None => prompt::ask_skin_type(input, output, &catalog)?,
    };

    let report = animals::generate(&request.template, &request.output, &corpus, &filter)
        .with_context(|| format!("generating {}", request.output.display()))?;
    Ok(report)
}

fn parse_filter_arg(catalog: &SkinTypeCatalog, skin_type: &str) -> Result<SkinTypeFilter, Error> {
    catalog.parse_filter(skin_type).ok_or_else(|| {
        let choices: Vec<&str> = catalog.choices().collect();
        Error::invalid_input(format!(
            "skin type {skin_type:?} not available (choose from: {})",
            choices.join(", ")
        ))
    })
}
