//! Animal data - fetches raw records and turns them into display records.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - display records, filters, errors
//! - **DTOs** (`dto.rs`) - exact shape of the data source's JSON
//! - **Normalizer** (`normalize.rs`) - DTO to domain, plus the skin-type filter
//! - **Catalog** (`catalog.rs`) - distinct skin types for input validation
//! - **Sources** (`local.rs`, `ninjas.rs`) - local JSON corpus or the API Ninjas endpoint
//! - **Service** (`service.rs`) - one run from fetch to written HTML
//!
//! Both sources implement [`AnimalSource`], so everything downstream of the
//! fetch is shared.
//!
//! # Usage
//!
//! ```ignore
//! use animal_cards::animals::{AnimalService, NinjasClient, NinjasConfig, Query, SkinTypeFilter};
//!
//! let service = AnimalService::new(NinjasClient::new(NinjasConfig::new(key))?);
//! let corpus = service.fetch(Query::Name("fox".into())).await?;
//! let html = corpus.render(&SkinTypeFilter::All)?;
//! ```

pub mod catalog;
pub mod domain;
pub mod dto;
pub mod local;
pub mod ninjas;
pub mod normalize;
pub mod service;
pub mod source;

pub use catalog::SkinTypeCatalog;
pub use domain::{AnimalError, Attribute, DisplayRecord, Query, SkinTypeFilter};
pub use local::LocalCorpus;
pub use ninjas::{NinjasClient, NinjasConfig};
pub use service::{AnimalService, Corpus, GenerateReport, generate};
pub use source::AnimalSource;
