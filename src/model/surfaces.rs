//! Surface colors derived from a palette's surface and surface tint.
//!
//! Before tone-based surfaces, Material 3 components tinted `surface` with
//! `surfaceTint` according to their tonal elevation. Dynamic schemes now ship
//! surface containers that are often close to grayscale, so the tinted
//! versions are exported alongside them as an alternative.

use super::color::Color;
use super::palette::Palette;
use crate::config::{channel, ELEVATION_LADDER, OVERLAY_BASE_PERCENT, OVERLAY_LOG_FACTOR};

/// Which named set of derived surfaces to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Legacy `surface + tonalElevation` levels, named `surfaceLevel1..5`.
    ElevatedLevels,
    /// Tinted replacements for the five surface containers.
    TintedContainers,
}

impl SurfaceKind {
    /// Entry names, one per rung of [`ELEVATION_LADDER`].
    pub const fn entry_names(self) -> [&'static str; 5] {
        match self {
            SurfaceKind::ElevatedLevels => [
                "surfaceLevel1",
                "surfaceLevel2",
                "surfaceLevel3",
                "surfaceLevel4",
                "surfaceLevel5",
            ],
            SurfaceKind::TintedContainers => [
                "tintedSurfaceContainerLowest",
                "tintedSurfaceContainerLow",
                "tintedSurfaceContainer",
                "tintedSurfaceContainerHigh",
                "tintedSurfaceContainerHighest",
            ],
        }
    }
}

/// One derived surface color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSurface {
    pub name: &'static str,
    /// Tonal elevation in dp.
    pub elevation: f32,
    pub color: Color,
}

/// Five derived surfaces in ascending elevation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSurfaceSet {
    pub kind: SurfaceKind,
    pub entries: [DerivedSurface; 5],
}

impl DerivedSurfaceSet {
    pub fn iter(&self) -> impl Iterator<Item = &DerivedSurface> {
        self.entries.iter()
    }

    pub fn colors(&self) -> [Color; 5] {
        self.entries.map(|entry| entry.color)
    }
}

/// Compute the derived surface set of a palette.
pub fn derive_surfaces(palette: &Palette, kind: SurfaceKind) -> DerivedSurfaceSet {
    let names = kind.entry_names();
    let entries = std::array::from_fn(|idx| {
        let elevation = ELEVATION_LADDER[idx];
        DerivedSurface {
            name: names[idx],
            elevation,
            color: surface_color_at_elevation(palette, elevation),
        }
    });
    DerivedSurfaceSet { kind, entries }
}

/// Surface color tinted for the given tonal elevation (dp).
pub fn surface_color_at_elevation(palette: &Palette, elevation: f32) -> Color {
    tint_surface(palette.surface(), palette.surface_tint(), elevation)
}

/// Overlay `tint` onto `surface` with the elevation-dependent opacity.
///
/// Reproduces Compose Material 3: the overlay alpha is
/// `(4.5 * ln(elevation + 1) + 2) / 100`, stored with 8-bit precision, and
/// the composite is quantized back to 8-bit channels.
pub fn tint_surface(surface: Color, tint: Color, elevation: f32) -> Color {
    if elevation <= 0.0 {
        return surface;
    }
    let alpha = overlay_alpha(elevation);
    composite_over(tint.with_alpha(channel::from_unit(alpha)), surface)
}

/// Opacity of the tint overlay at an elevation, before quantization.
pub fn overlay_alpha(elevation: f32) -> f32 {
    let ln = ((elevation + 1.0) as f64).ln() as f32;
    (OVERLAY_LOG_FACTOR * ln + OVERLAY_BASE_PERCENT) / 100.0
}

/// Source-over composite of `fg` onto `bg` in sRGB.
fn composite_over(fg: Color, bg: Color) -> Color {
    let fg_a = fg.alpha_f32();
    let bg_a = bg.alpha_f32();
    let a = fg_a + bg_a * (1.0 - fg_a);

    let component = |fg_c: f32, bg_c: f32| {
        if a == 0.0 {
            0.0
        } else {
            (fg_c * fg_a + bg_c * bg_a * (1.0 - fg_a)) / a
        }
    };

    Color::argb(
        channel::from_unit(a),
        channel::from_unit(component(fg.red_f32(), bg.red_f32())),
        channel::from_unit(component(fg.green_f32(), bg.green_f32())),
        channel::from_unit(component(fg.blue_f32(), bg.blue_f32())),
    )
}
