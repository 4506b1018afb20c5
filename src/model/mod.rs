//! Palette model: colors, roles, schemes and derived surfaces.

mod baseline;
mod color;
mod palette;
mod role;
mod surfaces;

pub use baseline::{baseline_pair, BASELINE_DARK, BASELINE_LIGHT};
pub use color::Color;
pub use palette::{FixedAccentColors, Mode, Palette, PalettePair};
pub use role::{ColorRole, ROLE_COUNT};
pub use surfaces::{
    derive_surfaces, overlay_alpha, surface_color_at_elevation, tint_surface, DerivedSurface,
    DerivedSurfaceSet, SurfaceKind,
};
