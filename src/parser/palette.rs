//! Palette document parser.
//!
//! A palette document is the JSON form of a [`PalettePair`]:
//!
//! ```json
//! { "light": { "primary": "#FF6750A4", ... }, "dark": { ... } }
//! ```

use crate::error::{ExportError, Result};
use crate::model::{baseline_pair, PalettePair};
use std::path::Path;
use tracing::debug;

/// Parse a palette document from a string.
pub fn parse_palette_str(content: &str) -> Result<PalettePair> {
    serde_json::from_str(content).map_err(|err| ExportError::InvalidPalette {
        message: err.to_string(),
    })
}

/// Parse a palette document from a file.
pub fn parse_palette_file(path: &Path) -> Result<PalettePair> {
    use std::fs;

    if !path.exists() {
        return Err(ExportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(ExportError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    debug!("Parsing palette document {}", path.display());
    parse_palette_str(&content)
}

/// Load the palette pair from `path`, or the baseline scheme when absent.
pub fn load_palette(path: Option<&Path>) -> Result<PalettePair> {
    match path {
        Some(path) => parse_palette_file(path),
        None => {
            debug!("No palette document given, using the baseline scheme");
            Ok(baseline_pair())
        }
    }
}

/// Serialize a palette pair as a pretty-printed palette document.
pub fn to_palette_document(pair: &PalettePair) -> Result<String> {
    Ok(serde_json::to_string_pretty(pair)?)
}
