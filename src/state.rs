//! Transient UI selection state and its save/restore bundle.

use crate::error::{ExportError, Result};
use crate::generator::ColorFormat;
use crate::model::Mode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

const KEY_FORMAT: &str = "colorFormat";
const KEY_SCREEN: &str = "screen";
const KEY_DARK: &str = "darkTheme";

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Color roles table.
    #[default]
    Preview,
    /// Generated theme source.
    Export,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Preview, Screen::Export];

    /// Position in the screen selector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Preview => "Preview",
            Screen::Export => "Export",
        }
    }
}

/// Selection state owned by the UI: format, screen and light/dark toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub format: ColorFormat,
    pub screen: Screen,
    pub dark: bool,
}

impl UiState {
    /// Initial state, following the system theme.
    pub fn new(system_dark: bool) -> Self {
        Self {
            format: ColorFormat::default(),
            screen: Screen::default(),
            dark: system_dark,
        }
    }

    /// Appearance mode currently selected.
    pub fn mode(&self) -> Mode {
        Mode::from_dark(self.dark)
    }

    /// Capture the state into a bundle.
    pub fn save(&self) -> SavedState {
        let mut saved = SavedState::default();
        saved.insert(KEY_FORMAT, self.format.key());
        saved.insert(KEY_SCREEN, self.screen.index().to_string());
        saved.insert(KEY_DARK, self.dark.to_string());
        saved
    }

    /// Rebuild the state from a bundle.
    ///
    /// An unknown format marker fails with [`ExportError::UnknownColorFormat`];
    /// other missing or malformed entries fail with [`ExportError::InvalidState`].
    pub fn restore(saved: &SavedState) -> Result<Self> {
        let format = saved.require(KEY_FORMAT)?.parse::<ColorFormat>()?;

        let screen_value = saved.require(KEY_SCREEN)?;
        let screen = screen_value
            .parse::<usize>()
            .ok()
            .and_then(Screen::from_index)
            .ok_or_else(|| invalid(KEY_SCREEN, screen_value))?;

        let dark_value = saved.require(KEY_DARK)?;
        let dark = dark_value
            .parse::<bool>()
            .map_err(|_| invalid(KEY_DARK, dark_value))?;

        Ok(Self {
            format,
            screen,
            dark,
        })
    }

    /// Restore, falling back to the initial state when the bundle is unusable.
    pub fn restore_or_default(saved: &SavedState, system_dark: bool) -> Self {
        Self::restore(saved).unwrap_or_else(|err| {
            warn!("Discarding saved state: {}", err);
            Self::new(system_dark)
        })
    }

    /// Load the state saved at `path`.
    ///
    /// A missing file gives the initial state. An unreadable or malformed
    /// file is logged and also gives the initial state.
    pub fn load_or_default(path: &Path, system_dark: bool) -> Self {
        if !path.exists() {
            return Self::new(system_dark);
        }
        match SavedState::read_from(path) {
            Ok(saved) => Self::restore_or_default(&saved, system_dark),
            Err(err) => {
                warn!("Ignoring saved state {}: {}", path.display(), err);
                Self::new(system_dark)
            }
        }
    }
}

fn invalid(key: &str, value: &str) -> ExportError {
    ExportError::InvalidState {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// String key/value bundle holding saved UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState(BTreeMap<String, String>);

impl SavedState {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| invalid(key, ""))
    }

    /// Read a bundle written by [`SavedState::write_to`].
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExportError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the bundle as JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
