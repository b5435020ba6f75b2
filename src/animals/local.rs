//! Local corpus provider: a pre-fetched JSON array of animal records on disk.

use std::path::{Path, PathBuf};

use super::domain::AnimalError;
use super::dto::RawAnimal;

/// Reads the whole corpus from one JSON file.
pub struct LocalCorpus {
    path: PathBuf,
}

impl LocalCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file. Only fails on missing or corrupt storage.
    pub fn load(&self) -> Result<Vec<RawAnimal>, AnimalError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| AnimalError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let animals: Vec<RawAnimal> = serde_json::from_str(&contents)
            .map_err(|e| AnimalError::Parse(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!("Loaded {} animals from {:?}", animals.len(), self.path);
        Ok(animals)
    }
}
