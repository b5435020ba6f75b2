//! Template loading, placeholder substitution and output writing.

use std::path::{Path, PathBuf};

use super::RenderError;

/// Marker in the template replaced by the rendered cards.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// A loaded HTML template
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    contents: String,
}

impl Template {
    /// Read a template file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RenderError::ReadTemplate(path.to_path_buf(), e))?;
        if !contents.contains(PLACEHOLDER) {
            tracing::warn!("Template {:?} has no {} marker", path, PLACEHOLDER);
        }
        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    #[cfg(test)]
    pub fn from_string(contents: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Substitute every placeholder occurrence with `content`.
    pub fn render(&self, content: &str) -> String {
        self.contents.replace(PLACEHOLDER, content)
    }
}

/// Write the rendered document.
///
/// Creates missing parent directories and writes through a temp file so a
/// failed run never leaves a half-written page behind.
pub fn write_output(path: &Path, html: &str) -> Result<(), RenderError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| RenderError::CreateDir(dir.to_path_buf(), e))?;
    }

    let temp_path = path.with_extension("html.tmp");
    std::fs::write(&temp_path, html).map_err(|e| RenderError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| RenderError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Wrote {:?}", path);
    Ok(())
}
