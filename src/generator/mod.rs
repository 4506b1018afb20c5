//! Theme file generators.

mod compose;
mod format;
mod preview;

pub use compose::{assemble, generate_compose_theme};
pub use format::{swatch_copy_text, swatch_hex, ColorFormat};
pub use preview::{render_preview, PreviewStyle};

use crate::config::ExportOptions;
use crate::error::{ExportError, Result};
use crate::model::PalettePair;

/// Kind of theme file an export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportTarget {
    /// Jetpack Compose `lightColorScheme`/`darkColorScheme` declarations.
    #[default]
    Compose,
    /// Views (XML) theme resources. Not implemented.
    Views,
}

impl ExportTarget {
    /// Generate the theme file for this target.
    pub fn generate(self, pair: &PalettePair, options: &ExportOptions) -> Result<String> {
        match self {
            ExportTarget::Compose => Ok(generate_compose_theme(pair, options)),
            ExportTarget::Views => Err(ExportError::NotImplemented {
                feature: "Views theme file".to_string(),
            }),
        }
    }
}

/// Generate the theme file selected by `options.target`.
pub fn generate_theme(pair: &PalettePair, options: &ExportOptions) -> Result<String> {
    tracing::debug!(
        export_target = ?options.target,
        format = %options.format,
        "generating theme file"
    );
    options.target.generate(pair, options)
}
