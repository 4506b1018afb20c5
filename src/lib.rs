//! dynamic-theme-export - Export Material You color palettes as theme source.
//!
//! This library models the light and dark color schemes of a device palette,
//! derives the tonal surface colors Material 3 uses for elevation, and
//! renders both schemes as Jetpack Compose `ColorScheme` declarations in one
//! of several color literal formats.
//!
//! # Example
//!
//! ```no_run
//! use dynamic_theme_export::{export_palette_file, ColorFormat, ExportOptions};
//! use std::path::Path;
//!
//! let options = ExportOptions::new(ColorFormat::IntegerComponentsHex);
//! let theme = export_palette_file(Some(Path::new("palette.json")), &options).unwrap();
//! println!("{}", theme);
//! ```

pub mod clipboard;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod session;
pub mod state;
pub mod validation;
pub mod worker;

// Re-exports for convenience
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use config::ExportOptions;
pub use error::{ErrorCode, ExportError, Result};
pub use generator::{
    assemble, generate_theme, render_preview, swatch_copy_text, ColorFormat, ExportTarget,
    PreviewStyle,
};
pub use model::{
    baseline_pair, derive_surfaces, Color, ColorRole, FixedAccentColors, Mode, Palette,
    PalettePair, SurfaceKind,
};
pub use parser::{load_palette, parse_palette_file, parse_palette_str};
pub use session::{Command, Session};
pub use state::{SavedState, Screen, UiState};
pub use validation::{validate_palette_pair, ValidationResult};
pub use worker::ExportWorker;

/// Export a palette document as a theme file.
///
/// Runs the whole pipeline:
/// 1. Load the palette document (the baseline scheme when `path` is `None`)
/// 2. Validate both schemes, logging any findings
/// 3. Generate the theme file for `options.target`
pub fn export_palette_file(
    path: Option<&std::path::Path>,
    options: &ExportOptions,
) -> Result<String> {
    let pair = load_palette(path)?;

    let validation = validate_palette_pair(&pair);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &validation.errors {
        tracing::error!("{}", error);
    }

    generate_theme(&pair, options)
}
