//! Palette document parser module.

mod palette;

pub use palette::{load_palette, parse_palette_file, parse_palette_str, to_palette_document};
