//! Application settings shared by the presentation layer.
//!
//! Settings are an explicit value handed to whoever renders, and persisted
//! only through a [`SettingsStore`]. Nothing here is global.

mod file;
mod memory;

pub use file::JsonFileSettingsStore;
pub use memory::InMemorySettingsStore;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Layout of list pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Table rows.
    List,
}

/// User interface preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Colour scheme.
    pub theme: Theme,
    /// Layout of list pages.
    pub view_mode: ViewMode,
    /// Whether the navigation sidebar is collapsed.
    pub sidebar_collapsed: bool,
}

impl AppSettings {
    /// Returns a copy with the theme switched.
    #[must_use]
    pub const fn with_theme_toggled(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// Returns a copy with the sidebar state flipped.
    #[must_use]
    pub const fn with_sidebar_toggled(self) -> Self {
        Self {
            sidebar_collapsed: !self.sidebar_collapsed,
            ..self
        }
    }
}

/// Errors raised by settings persistence.
#[derive(Debug, Clone, Error)]
pub enum SettingsStoreError {
    /// Stored settings could not be read or written.
    #[error("settings I/O failed: {0}")]
    Io(Arc<std::io::Error>),

    /// Stored settings are not valid JSON for [`AppSettings`].
    #[error("stored settings are malformed: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for SettingsStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Persistence boundary for [`AppSettings`].
pub trait SettingsStore: Send + Sync {
    /// Loads saved settings, returning defaults when nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError`] when saved settings cannot be read.
    fn load(&self) -> Result<AppSettings, SettingsStoreError>;

    /// Saves settings, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError::Io`] when the write fails.
    fn save(&self, settings: &AppSettings) -> Result<(), SettingsStoreError>;
}
