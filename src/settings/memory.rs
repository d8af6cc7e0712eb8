//! Volatile settings store.

use std::sync::RwLock;

use super::{AppSettings, SettingsStore, SettingsStoreError};

/// Keeps settings in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    saved: RwLock<Option<AppSettings>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> SettingsStoreError {
    SettingsStoreError::from(std::io::Error::other(err.to_string()))
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<AppSettings, SettingsStoreError> {
        let saved = self.saved.read().map_err(poisoned)?;
        Ok((*saved).unwrap_or_default())
    }

    fn save(&self, settings: &AppSettings) -> Result<(), SettingsStoreError> {
        let mut saved = self.saved.write().map_err(poisoned)?;
        *saved = Some(*settings);
        Ok(())
    }
}
