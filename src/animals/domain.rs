//! Internal domain models for animal cards.
//!
//! These types are OUR types - they don't change when the data source changes.
//! Raw records get converted into these types by the normalizer.

use std::fmt;

/// Resolved skin type of a record that doesn't declare one.
pub const NOT_SPECIFIED: &str = "not specified";

/// Literal the user types to disable skin-type filtering.
pub const ALL: &str = "All";

/// What a data source is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every record the source holds (local corpus)
    Everything,
    /// Records matching an animal name (remote lookup)
    Name(String),
}

impl Query {
    /// The queried name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Query::Everything => None,
            Query::Name(name) => Some(name),
        }
    }
}

/// User-chosen inclusion criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinTypeFilter {
    /// Wildcard, matches every record
    All,
    /// Exact match against the resolved skin type
    Exact(String),
}

impl SkinTypeFilter {
    /// Parse user input. `"All"` is the wildcard, anything else is exact.
    pub fn parse(input: &str) -> Self {
        if input == ALL {
            SkinTypeFilter::All
        } else {
            SkinTypeFilter::Exact(input.to_string())
        }
    }

    /// Whether a record with the given resolved skin type passes.
    pub fn matches(&self, resolved: &str) -> bool {
        match self {
            SkinTypeFilter::All => true,
            SkinTypeFilter::Exact(wanted) => wanted == resolved,
        }
    }
}

impl fmt::Display for SkinTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkinTypeFilter::All => f.write_str(ALL),
            SkinTypeFilter::Exact(s) => f.write_str(s),
        }
    }
}

/// Optional card attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Diet,
    Type,
    Lifespan,
    Location,
}

impl Attribute {
    /// Label shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Diet => "Diet",
            Attribute::Type => "Type",
            Attribute::Lifespan => "Lifespan",
            Attribute::Location => "Location",
        }
    }
}

/// A normalized record ready for rendering.
///
/// `attributes` only ever holds values that were present in the source,
/// ordered Diet, Type, Lifespan, Location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub name: String,
    /// Taxonomy ranks joined by `" >> "`
    pub taxonomy: String,
    pub attributes: Vec<(Attribute, String)>,
}

impl DisplayRecord {
    /// Look up a present attribute.
    #[cfg(test)]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| v.as_str())
    }
}

/// Errors that can occur while fetching or normalizing animals
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnimalError {
    #[error("Malformed record{}: {reason}", .name.as_ref().map(|n| format!(" '{n}'")).unwrap_or_default())]
    MalformedRecord {
        name: Option<String>,
        reason: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to read corpus {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported query: {0}")]
    UnsupportedQuery(String),

    #[error("API key missing - set API_NINJAS_KEY or pass --api-key")]
    MissingApiKey,
}

impl AnimalError {
    pub(crate) fn malformed(name: Option<&str>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            name: name.map(str::to_string),
            reason: reason.into(),
        }
    }
}
