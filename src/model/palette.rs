//! Color schemes for one appearance mode and the light/dark pair.

use super::color::Color;
use super::role::{ColorRole, ROLE_COUNT};
use crate::error::ExportError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

/// Appearance mode of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Both modes in export order.
    pub const BOTH: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Name used in generated code (`val light = ...`).
    pub fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Mode::Dark
        } else {
            Mode::Light
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete color scheme: one color for every [`ColorRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "BTreeMap<String, Color>")]
pub struct Palette {
    colors: [Color; ROLE_COUNT],
}

impl Palette {
    /// Build a palette by asking for the color of every role.
    pub fn from_fn(mut color_for: impl FnMut(ColorRole) -> Color) -> Self {
        Self {
            colors: ColorRole::ALL.map(&mut color_for),
        }
    }

    /// Build a palette from colors listed in [`ColorRole::ALL`] order.
    pub const fn from_colors(colors: [Color; ROLE_COUNT]) -> Self {
        Self { colors }
    }

    /// Color assigned to a role.
    pub fn get(&self, role: ColorRole) -> Color {
        self.colors[role.index()]
    }

    /// Copy of this palette with one role replaced.
    pub fn with(mut self, role: ColorRole, color: Color) -> Self {
        self.colors[role.index()] = color;
        self
    }

    /// Roles and colors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.into_iter().zip(self.colors.iter().copied())
    }

    pub fn surface(&self) -> Color {
        self.get(ColorRole::Surface)
    }

    pub fn surface_tint(&self) -> Color {
        self.get(ColorRole::SurfaceTint)
    }
}

impl Index<ColorRole> for Palette {
    type Output = Color;

    fn index(&self, role: ColorRole) -> &Color {
        &self.colors[role.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ROLE_COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.name(), &color)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, Color>> for Palette {
    type Error = ExportError;

    fn try_from(mut entries: BTreeMap<String, Color>) -> Result<Self, ExportError> {
        let mut colors = [Color::BLACK; ROLE_COUNT];
        for role in ColorRole::ALL {
            colors[role.index()] =
                entries
                    .remove(role.name())
                    .ok_or_else(|| ExportError::MissingRole {
                        role: role.name().to_string(),
                    })?;
        }

        if let Some(name) = entries.into_keys().next() {
            return Err(ExportError::UnknownRole { name });
        }

        Ok(Self { colors })
    }
}

/// The light and dark palettes captured together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalettePair {
    pub light: Palette,
    pub dark: Palette,
}

impl PalettePair {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    /// Palette for an appearance mode.
    pub fn get(&self, mode: Mode) -> &Palette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Both palettes in export order (light first).
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &Palette)> {
        Mode::BOTH.into_iter().map(move |mode| (mode, self.get(mode)))
    }

    /// The fixed accent colors shown in the preview table.
    pub fn fixed_accents(&self) -> FixedAccentColors {
        FixedAccentColors::from_pair(self)
    }
}

/// Fixed accent colors approximated from both palettes.
///
/// Dynamic schemes do not expose fixed accents, so they are taken from the
/// light containers (fixed), the dark accents (fixed dim) and the light
/// accents (on fixed variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAccentColors {
    pub primary_fixed: Color,
    pub on_primary_fixed: Color,
    pub secondary_fixed: Color,
    pub on_secondary_fixed: Color,
    pub tertiary_fixed: Color,
    pub on_tertiary_fixed: Color,
    pub primary_fixed_dim: Color,
    pub secondary_fixed_dim: Color,
    pub tertiary_fixed_dim: Color,
    pub on_primary_fixed_variant: Color,
    pub on_secondary_fixed_variant: Color,
    pub on_tertiary_fixed_variant: Color,
}

impl FixedAccentColors {
    pub fn from_pair(pair: &PalettePair) -> Self {
        let light = &pair.light;
        let dark = &pair.dark;
        Self {
            primary_fixed: light[ColorRole::PrimaryContainer],
            on_primary_fixed: light[ColorRole::OnPrimaryContainer],
            secondary_fixed: light[ColorRole::SecondaryContainer],
            on_secondary_fixed: light[ColorRole::OnSecondaryContainer],
            tertiary_fixed: light[ColorRole::TertiaryContainer],
            on_tertiary_fixed: light[ColorRole::OnTertiaryContainer],
            primary_fixed_dim: dark[ColorRole::Primary],
            secondary_fixed_dim: dark[ColorRole::Secondary],
            tertiary_fixed_dim: dark[ColorRole::Tertiary],
            on_primary_fixed_variant: light[ColorRole::Primary],
            on_secondary_fixed_variant: light[ColorRole::Secondary],
            on_tertiary_fixed_variant: light[ColorRole::Tertiary],
        }
    }

    /// Labeled entries grouped per accent (primary, secondary, tertiary).
    pub fn groups(&self) -> [[(&'static str, Color); 4]; 3] {
        [
            [
                ("Primary Fixed", self.primary_fixed),
                ("Primary Fixed Dim", self.primary_fixed_dim),
                ("On Primary Fixed", self.on_primary_fixed),
                ("On Primary Fixed Variant", self.on_primary_fixed_variant),
            ],
            [
                ("Secondary Fixed", self.secondary_fixed),
                ("Secondary Fixed Dim", self.secondary_fixed_dim),
                ("On Secondary Fixed", self.on_secondary_fixed),
                ("On Secondary Fixed Variant", self.on_secondary_fixed_variant),
            ],
            [
                ("Tertiary Fixed", self.tertiary_fixed),
                ("Tertiary Fixed Dim", self.tertiary_fixed_dim),
                ("On Tertiary Fixed", self.on_tertiary_fixed),
                ("On Tertiary Fixed Variant", self.on_tertiary_fixed_variant),
            ],
        ]
    }
}
