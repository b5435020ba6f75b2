//! Rendering of display records into the static HTML page.

mod html;
mod template;

use std::path::PathBuf;

pub use html::{animal_card, escape_html, no_results, render_cards};
pub use template::{PLACEHOLDER, Template, write_output};

/// Template and output file errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to read template {0}: {1}")]
    ReadTemplate(PathBuf, std::io::Error),

    #[error("Failed to create output directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to write output to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}
