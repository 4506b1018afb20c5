//! The closed set of color roles in a Material 3 color scheme.

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! color_roles {
    ($($variant:ident => $name:literal, $label:literal;)+) => {
        /// A named semantic color slot in a color scheme.
        ///
        /// Declaration order is the export order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum ColorRole {
            $($variant,)+
        }

        impl ColorRole {
            /// Every role, in declaration order.
            pub const ALL: [ColorRole; ROLE_COUNT] = [$(ColorRole::$variant,)+];

            /// Identifier used in generated code and palette documents.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $name,)+
                }
            }

            /// Human readable label used in the preview table.
            pub const fn label(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $label,)+
                }
            }
        }
    };
}

/// Number of roles in a palette.
pub const ROLE_COUNT: usize = 36;

color_roles! {
    Primary => "primary", "Primary";
    OnPrimary => "onPrimary", "On Primary";
    PrimaryContainer => "primaryContainer", "Primary Container";
    OnPrimaryContainer => "onPrimaryContainer", "On Primary Container";
    InversePrimary => "inversePrimary", "Inverse Primary";
    Secondary => "secondary", "Secondary";
    OnSecondary => "onSecondary", "On Secondary";
    SecondaryContainer => "secondaryContainer", "Secondary Container";
    OnSecondaryContainer => "onSecondaryContainer", "On Secondary Container";
    Tertiary => "tertiary", "Tertiary";
    OnTertiary => "onTertiary", "On Tertiary";
    TertiaryContainer => "tertiaryContainer", "Tertiary Container";
    OnTertiaryContainer => "onTertiaryContainer", "On Tertiary Container";
    Background => "background", "Background";
    OnBackground => "onBackground", "On Background";
    Surface => "surface", "Surface";
    OnSurface => "onSurface", "On Surface";
    SurfaceVariant => "surfaceVariant", "Surface Variant";
    OnSurfaceVariant => "onSurfaceVariant", "On Surface Variant";
    SurfaceTint => "surfaceTint", "Surface Tint";
    InverseSurface => "inverseSurface", "Inverse Surface";
    InverseOnSurface => "inverseOnSurface", "Inverse On Surface";
    Error => "error", "Error";
    OnError => "onError", "On Error";
    ErrorContainer => "errorContainer", "Error Container";
    OnErrorContainer => "onErrorContainer", "On Error Container";
    Outline => "outline", "Outline";
    OutlineVariant => "outlineVariant", "Outline Variant";
    Scrim => "scrim", "Scrim";
    SurfaceBright => "surfaceBright", "Surface Bright";
    SurfaceDim => "surfaceDim", "Surface Dim";
    SurfaceContainerLowest => "surfaceContainerLowest", "Surface Container Lowest";
    SurfaceContainerLow => "surfaceContainerLow", "Surface Container Low";
    SurfaceContainer => "surfaceContainer", "Surface Container";
    SurfaceContainerHigh => "surfaceContainerHigh", "Surface Container High";
    SurfaceContainerHighest => "surfaceContainerHighest", "Surface Container Highest";
}

impl ColorRole {
    /// Position of this role in [`ColorRole::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The role whose color is drawn on top of this one, if any.
    ///
    /// Matches Material's `contentColorFor`: roles without a paired "on" role
    /// (the "on" roles themselves, outlines, scrim, tint, inverse primary)
    /// return `None`.
    pub const fn content_role(self) -> Option<ColorRole> {
        use ColorRole::*;
        match self {
            Primary => Some(OnPrimary),
            PrimaryContainer => Some(OnPrimaryContainer),
            Secondary => Some(OnSecondary),
            SecondaryContainer => Some(OnSecondaryContainer),
            Tertiary => Some(OnTertiary),
            TertiaryContainer => Some(OnTertiaryContainer),
            Background => Some(OnBackground),
            Error => Some(OnError),
            ErrorContainer => Some(OnErrorContainer),
            InverseSurface => Some(InverseOnSurface),
            SurfaceVariant => Some(OnSurfaceVariant),
            Surface | SurfaceBright | SurfaceDim | SurfaceContainerLowest | SurfaceContainerLow
            | SurfaceContainer | SurfaceContainerHigh | SurfaceContainerHighest => Some(OnSurface),
            _ => None,
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == name)
            .ok_or_else(|| ExportError::UnknownRole {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roles_are_unique_and_indexed() {
        let names: HashSet<_> = ColorRole::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), ROLE_COUNT);
        for (idx, role) in ColorRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), idx);
        }
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(ColorRole::ALL[0], ColorRole::Primary);
        assert_eq!(ColorRole::ALL[4], ColorRole::InversePrimary);
        assert_eq!(ColorRole::ALL[ROLE_COUNT - 1], ColorRole::SurfaceContainerHighest);
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(
            "surfaceContainerHigh".parse::<ColorRole>().unwrap(),
            ColorRole::SurfaceContainerHigh
        );
        assert!(matches!(
            "Primary".parse::<ColorRole>(),
            Err(ExportError::UnknownRole { .. })
        ));
    }

    #[test]
    fn test_serde_name_matches_name() {
        for role in ColorRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.name()));
        }
    }

    #[test]
    fn test_content_roles() {
        assert_eq!(ColorRole::Primary.content_role(), Some(ColorRole::OnPrimary));
        assert_eq!(
            ColorRole::SurfaceContainerLowest.content_role(),
            Some(ColorRole::OnSurface)
        );
        assert_eq!(
            ColorRole::InverseSurface.content_role(),
            Some(ColorRole::InverseOnSurface)
        );
        assert_eq!(ColorRole::OnPrimary.content_role(), None);
        assert_eq!(ColorRole::InversePrimary.content_role(), None);
    }
}
