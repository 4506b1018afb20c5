//! Color literal formats for generated code.

use crate::error::{ExportError, Result};
use crate::model::{Color, ColorRole, Palette};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// The supported color constructor literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorFormat {
    /// `Color(red = 1.0f, green = 1.0f, blue = 1.0f)`
    FloatComponents,
    /// `Color(0xFF0000FF)`
    #[default]
    #[serde(rename = "SRGBInteger")]
    SrgbInteger,
    /// `Color(red = 0xFF, green = 0xFF, blue = 0xFF)`
    IntegerComponentsHex,
    /// `Color(red = 255, green = 255, blue = 255)`
    IntegerComponents,
}

impl ColorFormat {
    /// Every format, in selector order.
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::FloatComponents,
        ColorFormat::SrgbInteger,
        ColorFormat::IntegerComponentsHex,
        ColorFormat::IntegerComponents,
    ];

    /// Render a color as a literal in this format.
    pub fn format(self, color: Color) -> String {
        match self {
            ColorFormat::FloatComponents => format!(
                "Color(red = {}f, green = {}f, blue = {}f)",
                float_literal(color.red_f32()),
                float_literal(color.green_f32()),
                float_literal(color.blue_f32()),
            ),
            ColorFormat::SrgbInteger => format!("Color(0x{:08X})", color.to_argb()),
            ColorFormat::IntegerComponentsHex => format!(
                "Color(red = 0x{:02X}, green = 0x{:02X}, blue = 0x{:02X})",
                color.red(),
                color.green(),
                color.blue(),
            ),
            ColorFormat::IntegerComponents => format!(
                "Color(red = {}, green = {}, blue = {})",
                color.red(),
                color.green(),
                color.blue(),
            ),
        }
    }

    /// Stable key used when saving UI state.
    pub const fn key(self) -> &'static str {
        match self {
            ColorFormat::FloatComponents => "FloatComponents",
            ColorFormat::SrgbInteger => "SRGBInteger",
            ColorFormat::IntegerComponentsHex => "IntegerComponentsHex",
            ColorFormat::IntegerComponents => "IntegerComponents",
        }
    }

    /// Parse a state key or one of the short names `float`, `srgb`, `hex`, `int`.
    pub fn from_alias(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "float" => Ok(ColorFormat::FloatComponents),
            "srgb" | "argb" => Ok(ColorFormat::SrgbInteger),
            "hex" => Ok(ColorFormat::IntegerComponentsHex),
            "int" => Ok(ColorFormat::IntegerComponents),
            _ => name.trim().parse(),
        }
    }

    /// Example literal shown next to the format selector.
    pub fn sample(self) -> String {
        self.format(Color::BLUE)
    }
}

/// Shortest round-trip form that always keeps a fractional part (`1.0`, `0.4`).
fn float_literal(value: f32) -> String {
    format!("{:?}", value)
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorFormat {
    type Err = ExportError;

    /// Restore a format from its [`ColorFormat::key`].
    fn from_str(s: &str) -> Result<Self> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| ExportError::UnknownColorFormat {
                value: s.to_string(),
            })
    }
}

/// `#RRGGBB` form used when a single swatch is copied.
pub fn swatch_hex(color: Color) -> String {
    color.hex_rgb()
}

/// Clipboard text for one swatch: the role and, if it has one, its content role.
///
/// ```text
/// Primary: #6750A4
/// On Primary: #FFFFFF
/// ```
pub fn swatch_copy_text(palette: &Palette, role: ColorRole) -> String {
    let mut text = String::new();
    writeln!(text, "{}: {}", role.label(), swatch_hex(palette[role])).unwrap();
    if let Some(content) = role.content_role() {
        writeln!(text, "{}: {}", content.label(), swatch_hex(palette[content])).unwrap();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_srgb_integer() {
        assert_eq!(ColorFormat::SrgbInteger.format(Color::RED), "Color(0xFFFF0000)");
        assert_eq!(ColorFormat::SrgbInteger.format(Color::GREEN), "Color(0xFF00FF00)");
        assert_eq!(ColorFormat::SrgbInteger.format(Color::BLUE), "Color(0xFF0000FF)");
        assert_eq!(
            ColorFormat::SrgbInteger.format(Color::from_argb(0xFF123456)),
            "Color(0xFF123456)"
        );
        assert_eq!(
            ColorFormat::SrgbInteger.format(Color::argb(0x00, 0x01, 0x02, 0x03)),
            "Color(0x00010203)"
        );
    }

    #[test]
    fn test_float_components() {
        assert_eq!(
            ColorFormat::FloatComponents.format(Color::RED),
            "Color(red = 1.0f, green = 0.0f, blue = 0.0f)"
        );
        assert_eq!(
            ColorFormat::FloatComponents.format(Color::GREEN),
            "Color(red = 0.0f, green = 1.0f, blue = 0.0f)"
        );
        assert_eq!(
            ColorFormat::FloatComponents.format(Color::BLUE),
            "Color(red = 0.0f, green = 0.0f, blue = 1.0f)"
        );
        assert_eq!(
            ColorFormat::FloatComponents.format(Color::rgb(51, 102, 204)),
            "Color(red = 0.2f, green = 0.4f, blue = 0.8f)"
        );
    }

    /// `(name, value)` pairs of a component literal, in red, green, blue order.
    fn components(text: &str) -> Vec<(&str, &str)> {
        text.strip_prefix("Color(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap()
            .split(", ")
            .map(|component| component.split_once(" = ").unwrap())
            .collect()
    }

    /// One color per channel: `value` in that channel, a different value elsewhere.
    fn channel_samples(value: u8) -> [(usize, Color); 3] {
        let other = value.wrapping_add(0x55);
        [
            (0, Color::rgb(value, other, other)),
            (1, Color::rgb(other, value, other)),
            (2, Color::rgb(other, other, value)),
        ]
    }

    #[test]
    fn test_float_components_parse_back() {
        for value in 0..=255u8 {
            for (channel, color) in channel_samples(value) {
                let text = ColorFormat::FloatComponents.format(color);
                let parts = components(&text);
                assert_eq!(
                    parts.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
                    ["red", "green", "blue"]
                );
                let literal = parts[channel].1.strip_suffix('f').unwrap();
                let parsed: f32 = literal.parse().unwrap();
                assert_eq!(parsed, value as f32 / 255.0, "{}", text);
                assert!(literal.contains('.'), "{} lacks a fractional part", literal);
            }
        }
    }

    #[test]
    fn test_integer_components_hex_every_channel() {
        for value in 0..=255u8 {
            for (channel, color) in channel_samples(value) {
                let text = ColorFormat::IntegerComponentsHex.format(color);
                let literal = components(&text)[channel].1;
                assert_eq!(literal, format!("0x{:02X}", value), "{}", text);
                assert_eq!(u8::from_str_radix(&literal[2..], 16).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_integer_components_hex() {
        assert_eq!(
            ColorFormat::IntegerComponentsHex.format(Color::RED),
            "Color(red = 0xFF, green = 0x00, blue = 0x00)"
        );
        assert_eq!(
            ColorFormat::IntegerComponentsHex.format(Color::rgb(0x12, 0x34, 0x56)),
            "Color(red = 0x12, green = 0x34, blue = 0x56)"
        );
        assert_eq!(
            ColorFormat::IntegerComponentsHex.format(Color::rgb(0x0A, 0x0B, 0x0C)),
            "Color(red = 0x0A, green = 0x0B, blue = 0x0C)"
        );
    }

    #[test]
    fn test_integer_components() {
        assert_eq!(
            ColorFormat::IntegerComponents.format(Color::RED),
            "Color(red = 255, green = 0, blue = 0)"
        );
        assert_eq!(
            ColorFormat::IntegerComponents.format(Color::rgb(12, 34, 56)),
            "Color(red = 12, green = 34, blue = 56)"
        );
    }

    #[test]
    fn test_alpha_is_ignored_by_component_formats() {
        let translucent = Color::argb(0x40, 0x12, 0x34, 0x56);
        assert_eq!(
            ColorFormat::IntegerComponents.format(translucent),
            ColorFormat::IntegerComponents.format(translucent.with_alpha(0xFF))
        );
    }

    #[test]
    fn test_key_round_trip() {
        for format in ColorFormat::ALL {
            assert_eq!(format.key().parse::<ColorFormat>().unwrap(), format);
        }
        assert!(matches!(
            "Hex".parse::<ColorFormat>(),
            Err(ExportError::UnknownColorFormat { value }) if value == "Hex"
        ));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ColorFormat::from_alias("hex").unwrap(), ColorFormat::IntegerComponentsHex);
        assert_eq!(ColorFormat::from_alias("SRGB").unwrap(), ColorFormat::SrgbInteger);
        assert_eq!(
            ColorFormat::from_alias(" FloatComponents ").unwrap(),
            ColorFormat::FloatComponents
        );
        assert!(ColorFormat::from_alias("rgb").is_err());
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&ColorFormat::SrgbInteger).unwrap();
        assert_eq!(json, "\"SRGBInteger\"");
    }

    #[test]
    fn test_sample() {
        assert_snapshot!(ColorFormat::IntegerComponentsHex.sample(), @"Color(red = 0x00, green = 0x00, blue = 0xFF)");
    }

    #[test]
    fn test_swatch_copy_text() {
        let palette = Palette::from_fn(|_| Color::BLACK)
            .with(ColorRole::Primary, Color::rgb(0x67, 0x50, 0xA4))
            .with(ColorRole::OnPrimary, Color::WHITE);
        assert_eq!(
            swatch_copy_text(&palette, ColorRole::Primary),
            "Primary: #6750A4\nOn Primary: #FFFFFF\n"
        );
        assert_eq!(
            swatch_copy_text(&palette, ColorRole::Scrim),
            "Scrim: #000000\n"
        );
    }
}
