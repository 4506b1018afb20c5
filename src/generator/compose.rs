//! Compose theme file generator.

use crate::config::ExportOptions;
use crate::model::{derive_surfaces, Mode, Palette, PalettePair, SurfaceKind};
use std::fmt::Write;

use super::format::ColorFormat;

/// Generate Compose `lightColorScheme`/`darkColorScheme` declarations.
///
/// Output for a fixed pair and format is byte-identical across calls:
///
/// ```text
/// val light = lightColorScheme(
///     primary = Color(0xFF6750A4),
///     ...
///     // surfaceLevel1 = Color(0xFFF6EEFA),
/// )
///
/// val dark = darkColorScheme(
///     ...
/// )
/// ```
pub fn generate_compose_theme(pair: &PalettePair, options: &ExportOptions) -> String {
    let mut output = String::new();

    for (idx, (mode, palette)) in pair.iter().enumerate() {
        if idx > 0 {
            writeln!(output).unwrap();
        }
        generate_scheme_block(&mut output, mode, palette, options.format, options.surfaces);
    }

    output
}

/// Generate the Compose theme with the default derived surface block.
pub fn assemble(pair: &PalettePair, format: ColorFormat) -> String {
    generate_compose_theme(pair, &ExportOptions::new(format))
}

/// Generate one `val <mode> = <mode>ColorScheme(...)` block.
fn generate_scheme_block(
    output: &mut String,
    mode: Mode,
    palette: &Palette,
    format: ColorFormat,
    surfaces: Option<SurfaceKind>,
) {
    writeln!(output, "val {} = {}ColorScheme(", mode.name(), mode.name()).unwrap();

    for (role, color) in palette.iter() {
        writeln!(output, "    {} = {},", role.name(), format.format(color)).unwrap();
    }

    // Derived surfaces are not color scheme parameters
    if let Some(kind) = surfaces {
        for surface in derive_surfaces(palette, kind).iter() {
            writeln!(
                output,
                "    // {} = {},",
                surface.name,
                format.format(surface.color)
            )
            .unwrap();
        }
    }

    writeln!(output, ")").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{baseline_pair, Color, ColorRole, ROLE_COUNT};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_structure() {
        let output = assemble(&baseline_pair(), ColorFormat::SrgbInteger);
        let lines: Vec<&str> = output.lines().collect();

        // header + roles + 5 derived + closing, twice, plus the separator
        assert_eq!(lines.len(), 2 * (ROLE_COUNT + 7) + 1);
        assert_eq!(lines[0], "val light = lightColorScheme(");
        assert_eq!(lines[1], "    primary = Color(0xFF6750A4),");
        assert_eq!(lines[ROLE_COUNT + 6], ")");
        assert_eq!(lines[ROLE_COUNT + 7], "");
        assert_eq!(lines[ROLE_COUNT + 8], "val dark = darkColorScheme(");
        assert_eq!(lines[ROLE_COUNT + 9], "    primary = Color(0xFFD0BCFF),");
        assert!(output.ends_with(")\n"));
    }

    #[test]
    fn test_derived_surfaces_are_commented() {
        let output = assemble(&baseline_pair(), ColorFormat::IntegerComponents);
        let derived: Vec<&str> = output
            .lines()
            .filter(|line| line.trim_start().starts_with("//"))
            .collect();
        assert_eq!(derived.len(), 10);
        assert!(derived[0].starts_with("    // surfaceLevel1 = Color(red = "));
        assert!(derived[4].starts_with("    // surfaceLevel5 = "));
    }

    #[test]
    fn test_surface_options() {
        let pair = baseline_pair();
        let none = generate_compose_theme(
            &pair,
            &ExportOptions::new(ColorFormat::SrgbInteger).with_surfaces(None),
        );
        assert!(!none.contains("//"));

        let tinted = generate_compose_theme(
            &pair,
            &ExportOptions::new(ColorFormat::SrgbInteger)
                .with_surfaces(Some(SurfaceKind::TintedContainers)),
        );
        assert_eq!(tinted.matches("// tintedSurfaceContainerLowest = ").count(), 2);
    }

    #[test]
    fn test_small_pair_exact_output() {
        let light = Palette::from_fn(|_| Color::WHITE).with(ColorRole::Primary, Color::RED);
        let dark = Palette::from_fn(|_| Color::BLACK);
        let pair = PalettePair::new(light, dark);
        let output = generate_compose_theme(
            &pair,
            &ExportOptions::new(ColorFormat::IntegerComponentsHex).with_surfaces(None),
        );

        let mut expected = String::from("val light = lightColorScheme(\n");
        for role in ColorRole::ALL {
            let value = if role == ColorRole::Primary {
                "0xFF, green = 0x00, blue = 0x00"
            } else {
                "0xFF, green = 0xFF, blue = 0xFF"
            };
            expected.push_str(&format!("    {} = Color(red = {}),\n", role.name(), value));
        }
        expected.push_str(")\n\nval dark = darkColorScheme(\n");
        for role in ColorRole::ALL {
            expected.push_str(&format!(
                "    {} = Color(red = 0x00, green = 0x00, blue = 0x00),\n",
                role.name()
            ));
        }
        expected.push_str(")\n");

        assert_eq!(output, expected);
    }

    #[test]
    fn test_deterministic() {
        let pair = baseline_pair();
        for format in ColorFormat::ALL {
            assert_eq!(assemble(&pair, format), assemble(&pair.clone(), format));
        }
    }
}
