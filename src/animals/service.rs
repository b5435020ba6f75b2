//! Animal card service - orchestrates a single run
//!
//! 1. Fetch the corpus once from the configured source
//! 2. Offer its skin-type catalog for filter validation
//! 3. Normalize and filter records
//! 4. Render cards into the template and write the output file

use std::path::{Path, PathBuf};

use crate::animals::{
    catalog::SkinTypeCatalog,
    domain::{AnimalError, DisplayRecord, Query, SkinTypeFilter},
    dto::RawAnimal,
    normalize,
    source::AnimalSource,
};
use crate::error::{Result, ResultExt};
use crate::render::{self, Template};

/// Records fetched for one query
#[derive(Debug, Clone)]
pub struct Corpus {
    pub query: Query,
    pub animals: Vec<RawAnimal>,
}

impl Corpus {
    pub fn new(query: Query, animals: Vec<RawAnimal>) -> Self {
        Self { query, animals }
    }

    /// Skin types the user may pick from.
    pub fn catalog(&self) -> SkinTypeCatalog {
        SkinTypeCatalog::from_corpus(&self.animals)
    }

    /// Normalized records that pass the filter, in corpus order.
    pub fn select(&self, filter: &SkinTypeFilter) -> std::result::Result<Vec<DisplayRecord>, AnimalError> {
        normalize::normalize_corpus(&self.animals, filter)
    }

    /// HTML fragment for the filtered corpus.
    pub fn render(&self, filter: &SkinTypeFilter) -> std::result::Result<String, AnimalError> {
        let records = self.select(filter)?;
        Ok(render::render_cards(&records, &self.query))
    }
}

/// Outcome of a successful generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub cards: usize,
}

/// Service wiring a data source to the renderer
pub struct AnimalService<S: AnimalSource> {
    source: S,
}

impl<S: AnimalSource> AnimalService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the corpus for a query.
    pub async fn fetch(&self, query: Query) -> Result<Corpus> {
        tracing::info!("Querying {} for {:?}", self.source.describe(), query);
        let animals = self
            .source
            .fetch(&query)
            .await
            .with_context(format!("fetching animals from {}", self.source.describe()))?;
        Ok(Corpus::new(query, animals))
    }
}

/// Render the filtered corpus into the template and write the output file.
pub fn generate(
    template_path: &Path,
    output_path: &Path,
    corpus: &Corpus,
    filter: &SkinTypeFilter,
) -> Result<GenerateReport> {
    let template = Template::load(template_path)?;
    let records = corpus.select(filter)?;
    let content = render::render_cards(&records, &corpus.query);
    let html = template.render(&content);
    render::write_output(output_path, &html)?;

    tracing::info!(
        "Wrote {} cards (filter: {}, template: {:?}) to {:?}",
        records.len(),
        filter,
        template.path(),
        output_path
    );
    Ok(GenerateReport {
        output: output_path.to_path_buf(),
        cards: records.len(),
    })
}
