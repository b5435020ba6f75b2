//! Skin-type listing command.

use std::path::Path;

use tokio::runtime::Runtime;

use crate::animals::{AnimalService, LocalCorpus, Query};
use crate::config::Config;

use super::generate::ninjas_client;

/// Print the skin types a corpus offers
pub fn cmd_skin_types(
    rt: &Runtime,
    config: &Config,
    data: Option<&Path>,
    name: Option<&str>,
    api_key: Option<&str>,
) -> anyhow::Result<()> {
    let corpus = match name {
        Some(name) => {
            let service = AnimalService::new(ninjas_client(config, api_key, None)?);
            rt.block_on(service.fetch(Query::Name(name.to_string())))?
        }
        None => {
            let data = data.unwrap_or(config.paths.data.as_path());
            let service = AnimalService::new(LocalCorpus::new(data));
            rt.block_on(service.fetch(Query::Everything))?
        }
    };

    let catalog = corpus.catalog();
    println!("{} animals, {} skin types", corpus.animals.len(), catalog.skin_types().len());
    for choice in catalog.choices() {
        println!("  {}", choice);
    }
    Ok(())
}
