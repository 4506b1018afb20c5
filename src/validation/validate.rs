//! Palette sanity checks run before export.

use crate::config::MIN_CONTENT_CONTRAST;
use crate::model::{ColorRole, Mode, Palette, PalettePair};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate both palettes of a pair.
pub fn validate_palette_pair(pair: &PalettePair) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (mode, palette) in pair.iter() {
        result.merge(validate_palette(palette, mode));
    }

    if pair.light == pair.dark {
        result.add_warning("Light and dark palettes are identical");
    }

    result
}

/// Validate a single palette.
pub fn validate_palette(palette: &Palette, mode: Mode) -> ValidationResult {
    let mut result = ValidationResult::ok();

    // Derived surfaces composite onto surface, it has to be visible
    if palette[ColorRole::Surface].alpha() == 0 {
        result.add_error(format!("{}: surface is fully transparent", mode));
    }

    for (role, color) in palette.iter() {
        if role != ColorRole::Scrim && !color.is_opaque() {
            result.add_warning(format!(
                "{}: {} is translucent (alpha 0x{:02X})",
                mode,
                role,
                color.alpha()
            ));
        }

        if let Some(content) = role.content_role() {
            let ratio = color.contrast_ratio(palette[content]);
            if ratio < MIN_CONTENT_CONTRAST {
                result.add_warning(format!(
                    "{}: {} on {} has low contrast ({:.2}:1)",
                    mode, content, role, ratio
                ));
            }
        }
    }

    if palette[ColorRole::SurfaceTint] != palette[ColorRole::Primary] {
        result.add_warning(format!(
            "{}: surfaceTint ({}) differs from primary ({})",
            mode,
            palette[ColorRole::SurfaceTint].hex_rgb(),
            palette[ColorRole::Primary].hex_rgb()
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{baseline_pair, Color, BASELINE_DARK, BASELINE_LIGHT};

    #[test]
    fn test_baseline_passes_cleanly() {
        let result = validate_palette_pair(&baseline_pair());
        assert!(result.passed);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_low_contrast_warning() {
        let light = BASELINE_LIGHT.with(ColorRole::OnPrimary, Color::rgb(0x6A, 0x52, 0xA8));
        let result = validate_palette(&light, Mode::Light);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("onPrimary on primary"));
    }

    #[test]
    fn test_translucent_roles() {
        let dark = BASELINE_DARK
            .with(ColorRole::Scrim, Color::argb(0x80, 0, 0, 0))
            .with(ColorRole::Outline, Color::argb(0x80, 0x93, 0x8F, 0x99));
        let result = validate_palette(&dark, Mode::Dark);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("dark: outline is translucent"));
    }

    #[test]
    fn test_transparent_surface_fails() {
        let light = BASELINE_LIGHT
            .with(ColorRole::Surface, Color::argb(0, 0xFE, 0xF7, 0xFF))
            .with(ColorRole::OnSurface, Color::BLACK);
        let result = validate_palette_pair(&PalettePair::new(light, BASELINE_DARK));
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_identical_modes_warn() {
        let result = validate_palette_pair(&PalettePair::new(BASELINE_LIGHT, BASELINE_LIGHT));
        assert!(result.passed);
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Light and dark palettes are identical"));
    }
}
