//! Material 3 baseline color schemes.
//!
//! Used when no palette document is supplied, in place of the device's
//! dynamic scheme.

use super::color::Color;
use super::palette::{Palette, PalettePair};
use super::role::ROLE_COUNT;

const fn scheme(argb: [u32; ROLE_COUNT]) -> Palette {
    let mut colors = [Color::BLACK; ROLE_COUNT];
    let mut idx = 0;
    while idx < ROLE_COUNT {
        colors[idx] = Color::from_argb(argb[idx]);
        idx += 1;
    }
    Palette::from_colors(colors)
}

/// Baseline light scheme, in role declaration order.
pub const BASELINE_LIGHT: Palette = scheme([
    0xFF6750A4, // primary
    0xFFFFFFFF, // onPrimary
    0xFFEADDFF, // primaryContainer
    0xFF21005D, // onPrimaryContainer
    0xFFD0BCFF, // inversePrimary
    0xFF625B71, // secondary
    0xFFFFFFFF, // onSecondary
    0xFFE8DEF8, // secondaryContainer
    0xFF1D192B, // onSecondaryContainer
    0xFF7D5260, // tertiary
    0xFFFFFFFF, // onTertiary
    0xFFFFD8E4, // tertiaryContainer
    0xFF31111D, // onTertiaryContainer
    0xFFFEF7FF, // background
    0xFF1D1B20, // onBackground
    0xFFFEF7FF, // surface
    0xFF1D1B20, // onSurface
    0xFFE7E0EC, // surfaceVariant
    0xFF49454F, // onSurfaceVariant
    0xFF6750A4, // surfaceTint
    0xFF322F35, // inverseSurface
    0xFFF5EFF7, // inverseOnSurface
    0xFFB3261E, // error
    0xFFFFFFFF, // onError
    0xFFF9DEDC, // errorContainer
    0xFF410E0B, // onErrorContainer
    0xFF79747E, // outline
    0xFFCAC4D0, // outlineVariant
    0xFF000000, // scrim
    0xFFFEF7FF, // surfaceBright
    0xFFDED8E1, // surfaceDim
    0xFFFFFFFF, // surfaceContainerLowest
    0xFFF7F2FA, // surfaceContainerLow
    0xFFF3EDF7, // surfaceContainer
    0xFFECE6F0, // surfaceContainerHigh
    0xFFE6E0E9, // surfaceContainerHighest
]);

/// Baseline dark scheme, in role declaration order.
pub const BASELINE_DARK: Palette = scheme([
    0xFFD0BCFF, // primary
    0xFF381E72, // onPrimary
    0xFF4F378B, // primaryContainer
    0xFFEADDFF, // onPrimaryContainer
    0xFF6750A4, // inversePrimary
    0xFFCCC2DC, // secondary
    0xFF332D41, // onSecondary
    0xFF4A4458, // secondaryContainer
    0xFFE8DEF8, // onSecondaryContainer
    0xFFEFB8C8, // tertiary
    0xFF492532, // onTertiary
    0xFF633B48, // tertiaryContainer
    0xFFFFD8E4, // onTertiaryContainer
    0xFF141218, // background
    0xFFE6E0E9, // onBackground
    0xFF141218, // surface
    0xFFE6E0E9, // onSurface
    0xFF49454F, // surfaceVariant
    0xFFCAC4D0, // onSurfaceVariant
    0xFFD0BCFF, // surfaceTint
    0xFFE6E0E9, // inverseSurface
    0xFF322F35, // inverseOnSurface
    0xFFF2B8B5, // error
    0xFF601410, // onError
    0xFF8C1D18, // errorContainer
    0xFFF9DEDC, // onErrorContainer
    0xFF938F99, // outline
    0xFF49454F, // outlineVariant
    0xFF000000, // scrim
    0xFF3B383E, // surfaceBright
    0xFF141218, // surfaceDim
    0xFF0F0D13, // surfaceContainerLowest
    0xFF1D1B20, // surfaceContainerLow
    0xFF211F26, // surfaceContainer
    0xFF2B2930, // surfaceContainerHigh
    0xFF36343B, // surfaceContainerHighest
]);

/// The baseline light/dark pair.
pub fn baseline_pair() -> PalettePair {
    PalettePair::new(BASELINE_LIGHT, BASELINE_DARK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorRole;

    #[test]
    fn test_baseline_lookups() {
        assert_eq!(BASELINE_LIGHT[ColorRole::Primary], Color::rgb(0x67, 0x50, 0xA4));
        assert_eq!(BASELINE_LIGHT[ColorRole::SurfaceTint], BASELINE_LIGHT[ColorRole::Primary]);
        assert_eq!(BASELINE_DARK[ColorRole::InversePrimary], BASELINE_LIGHT[ColorRole::Primary]);
        assert_eq!(
            BASELINE_DARK[ColorRole::SurfaceContainerHighest],
            Color::rgb(0x36, 0x34, 0x3B)
        );
    }

    #[test]
    fn test_baseline_is_opaque() {
        let pair = baseline_pair();
        for (_, palette) in pair.iter() {
            assert!(palette.iter().all(|(_, color)| color.is_opaque()));
        }
    }
}
