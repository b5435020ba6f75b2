//! Trait definition for animal data sources.
//!
//! The normalizer and catalog never know where records came from. The
//! composition root picks a [`LocalCorpus`](super::LocalCorpus) or a
//! [`NinjasClient`](super::NinjasClient); tests substitute the mock.
//!
//! # Example
//!
//! ```ignore
//! use animal_cards::animals::{AnimalSource, Query};
//!
//! async fn count<S: AnimalSource>(source: &S) -> usize {
//!     source.fetch(&Query::Everything).await.map(|a| a.len()).unwrap_or(0)
//! }
//! ```

use async_trait::async_trait;

use super::domain::{AnimalError, Query};
use super::dto::RawAnimal;

/// Something that can hand back raw animal records for a query.
#[async_trait]
pub trait AnimalSource: Send + Sync {
    /// Fetch the corpus for a query. An empty result is not an error.
    async fn fetch(&self, query: &Query) -> Result<Vec<RawAnimal>, AnimalError>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

#[async_trait]
impl AnimalSource for super::local::LocalCorpus {
    async fn fetch(&self, _query: &Query) -> Result<Vec<RawAnimal>, AnimalError> {
        self.load()
    }

    fn describe(&self) -> String {
        format!("local corpus {}", self.path().display())
    }
}

#[async_trait]
impl AnimalSource for super::ninjas::NinjasClient {
    async fn fetch(&self, query: &Query) -> Result<Vec<RawAnimal>, AnimalError> {
        match query.name() {
            Some(name) => self.lookup(name).await,
            // The endpoint requires a name; there is no "list everything"
            None => Err(AnimalError::UnsupportedQuery(
                "API Ninjas lookups need an animal name".to_string(),
            )),
        }
    }

    fn describe(&self) -> String {
        format!("API Ninjas at {}", self.base_url())
    }
}
