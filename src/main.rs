//! Animal Cards - renders a static page of animal facts.
//!
//! Records come from the API Ninjas animals endpoint (looked up by name) or
//! from a local JSON corpus. The user picks a skin type, and the matching
//! animals are rendered as cards into an HTML template.

pub mod animals;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    // A .env file may provide API_NINJAS_KEY; load it before clap reads env
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();

    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("animal_cards=warn".parse()?))
        .init();

    let config = config::load();
    cli::run_command(&args, &config)
}
