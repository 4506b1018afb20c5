//! Configuration constants and export settings.

use crate::generator::{ColorFormat, ExportTarget};
use crate::model::SurfaceKind;

/// Tonal elevation ladder (in dp) used for the derived surface colors.
///
/// Mirrors the Material 3 elevation tokens Level1..Level5.
pub const ELEVATION_LADDER: [f32; 5] = [1.0, 3.0, 6.0, 8.0, 12.0];

/// Multiplier of `ln(elevation + 1)` in the tint overlay alpha, in percent.
pub const OVERLAY_LOG_FACTOR: f32 = 4.5;

/// Constant term of the tint overlay alpha, in percent.
pub const OVERLAY_BASE_PERCENT: f32 = 2.0;

/// Contrast ratio below which a role and its content role are reported.
pub const MIN_CONTENT_CONTRAST: f64 = 3.0;

/// Seconds a session waits for the export worker before giving up.
pub const EXPORT_TIMEOUT_SECS: u64 = 5;

/// Maximum value of an 8-bit color channel.
pub const CHANNEL_MAX: f32 = 255.0;

/// Export settings selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Literal format used for every color.
    pub format: ColorFormat,
    /// Derived surface colors appended as commented-out entries.
    pub surfaces: Option<SurfaceKind>,
    /// Kind of theme file to produce.
    pub target: ExportTarget,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ColorFormat::default(),
            surfaces: Some(SurfaceKind::ElevatedLevels),
            target: ExportTarget::Compose,
        }
    }
}

impl ExportOptions {
    /// Create options for the given format with default surfaces and target.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Replace the derived surface block.
    pub fn with_surfaces(mut self, surfaces: Option<SurfaceKind>) -> Self {
        self.surfaces = surfaces;
        self
    }

    /// Replace the export target.
    pub fn with_target(mut self, target: ExportTarget) -> Self {
        self.target = target;
        self
    }
}

/// Helpers for channel arithmetic shared by blending and formatting.
pub mod channel {
    use super::CHANNEL_MAX;

    /// Normalize an 8-bit channel to `[0.0, 1.0]`.
    #[inline]
    pub fn to_unit(value: u8) -> f32 {
        value as f32 / CHANNEL_MAX
    }

    /// Quantize a `[0.0, 1.0]` component back to 8 bits, rounding half up.
    #[inline]
    pub fn from_unit(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * CHANNEL_MAX + 0.5) as u8
    }
}
