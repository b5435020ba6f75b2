//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`AnimalError`], [`RenderError`]) for detailed handling
//! - `ConfigError` only surfaces from `init-config` and goes straight to `anyhow`
//!
//! # Example
//!
//! ```ignore
//! use animal_cards::error::{Result, ResultExt};
//!
//! fn build(path: &Path) -> Result<String> {
//!     let template = Template::load(path)?;         // RenderError auto-converts
//!     let records = corpus.select(&filter)?;         // AnimalError auto-converts
//!     Ok(template.render(&render_cards(&records, &query)))
//! }
//! ```

use crate::animals::AnimalError;
use crate::render::RenderError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching or normalizing animal records failed
    #[error("Animal error: {0}")]
    Animal(#[from] AnimalError),

    /// Template or output file error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// User input that doesn't pass validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, AnimalError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Animal(e).context(ctx))
    }
}
