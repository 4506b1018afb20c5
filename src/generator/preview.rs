//! Color roles table for terminal display.

use crate::model::{derive_surfaces, Color, ColorRole, Mode, Palette, PalettePair, SurfaceKind};
use owo_colors::OwoColorize;
use std::fmt::Write;

use super::format::swatch_hex;

/// Width of the label column.
const LABEL_WIDTH: usize = 28;

/// Presentation options for [`render_preview`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewStyle {
    /// Paint a truecolor swatch in front of every color.
    pub swatches: bool,
}

/// One table row: a color and, optionally, the color drawn on top of it.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    label: String,
    color: Color,
    content: Option<(String, Color)>,
}

impl Row {
    fn role(palette: &Palette, role: ColorRole) -> Self {
        Self {
            label: role.label().to_string(),
            color: palette[role],
            content: role
                .content_role()
                .map(|content| (content.label().to_string(), palette[content])),
        }
    }

    fn plain(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            content: None,
        }
    }
}

const ACCENT_ROLES: [ColorRole; 8] = [
    ColorRole::Primary,
    ColorRole::PrimaryContainer,
    ColorRole::Secondary,
    ColorRole::SecondaryContainer,
    ColorRole::Tertiary,
    ColorRole::TertiaryContainer,
    ColorRole::Error,
    ColorRole::ErrorContainer,
];

const SURFACE_ROLES: [ColorRole; 15] = [
    ColorRole::SurfaceDim,
    ColorRole::Surface,
    ColorRole::SurfaceBright,
    ColorRole::SurfaceContainerLowest,
    ColorRole::SurfaceContainerLow,
    ColorRole::SurfaceContainer,
    ColorRole::SurfaceContainerHigh,
    ColorRole::SurfaceContainerHighest,
    ColorRole::OnSurface,
    ColorRole::OnSurfaceVariant,
    ColorRole::Outline,
    ColorRole::OutlineVariant,
    ColorRole::InverseSurface,
    ColorRole::InversePrimary,
    ColorRole::Scrim,
];

const DEPRECATED_ROLES: [ColorRole; 3] = [
    ColorRole::Background,
    ColorRole::SurfaceVariant,
    ColorRole::SurfaceTint,
];

/// Render the color roles table for one mode of the pair.
pub fn render_preview(pair: &PalettePair, mode: Mode, style: &PreviewStyle) -> String {
    let palette = pair.get(mode);
    let mut output = String::new();

    writeln!(output, "Color roles ({})", mode).unwrap();

    let accents: Vec<Row> = ACCENT_ROLES.iter().map(|r| Row::role(palette, *r)).collect();
    write_section(&mut output, "ACCENT COLORS", &accents, style);

    let fixed: Vec<Row> = pair
        .fixed_accents()
        .groups()
        .iter()
        .flatten()
        .map(|(label, color)| Row::plain(*label, *color))
        .collect();
    write_section(&mut output, "FIXED ACCENT COLORS", &fixed, style);

    let surfaces: Vec<Row> = SURFACE_ROLES.iter().map(|r| Row::role(palette, *r)).collect();
    write_section(&mut output, "SURFACES", &surfaces, style);

    let deprecated: Vec<Row> = DEPRECATED_ROLES
        .iter()
        .map(|r| Row::role(palette, *r))
        .collect();
    write_section(&mut output, "DEPRECATED", &deprecated, style);

    let on_surface = palette[ColorRole::OnSurface];
    let elevated: Vec<Row> = derive_surfaces(palette, SurfaceKind::ElevatedLevels)
        .iter()
        .enumerate()
        .map(|(idx, surface)| Row {
            label: format!("Surface at +{}", idx + 1),
            color: surface.color,
            content: Some((ColorRole::OnSurface.label().to_string(), on_surface)),
        })
        .collect();
    write_section(&mut output, "LEGACY ELEVATED SURFACES", &elevated, style);

    output
}

fn write_section(output: &mut String, title: &str, rows: &[Row], style: &PreviewStyle) {
    writeln!(output).unwrap();
    writeln!(output, "> {}", title).unwrap();

    for row in rows {
        write!(output, "  ").unwrap();
        write_cell(output, &row.label, row.color, style);
        if let Some((label, color)) = &row.content {
            write!(output, "   ").unwrap();
            write_cell(output, label, *color, style);
        }
        writeln!(output).unwrap();
    }
}

fn write_cell(output: &mut String, label: &str, color: Color, style: &PreviewStyle) {
    if style.swatches {
        let (r, g, b) = (color.red(), color.green(), color.blue());
        write!(output, "{} ", "    ".on_truecolor(r, g, b)).unwrap();
    }
    write!(
        output,
        "{:<width$} {}",
        label,
        swatch_hex(color),
        width = LABEL_WIDTH
    )
    .unwrap();
}
