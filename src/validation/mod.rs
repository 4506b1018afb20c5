//! Palette validation module.

mod validate;

pub use validate::{validate_palette, validate_palette_pair, ValidationResult};
