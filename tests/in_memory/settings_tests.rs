//! In-memory integration tests for settings persistence.

use rstest::rstest;
use workforce_tasks::settings::{
    AppSettings, InMemorySettingsStore, SettingsStore, Theme, ViewMode,
};

#[rstest]
fn unsaved_store_returns_defaults() -> Result<(), eyre::Report> {
    let store = InMemorySettingsStore::new();
    let loaded = store.load()?;
    eyre::ensure!(loaded.theme == Theme::Light, "default theme is light");
    eyre::ensure!(loaded.view_mode == ViewMode::Grid, "default view is grid");
    eyre::ensure!(!loaded.sidebar_collapsed, "sidebar starts expanded");
    Ok(())
}

#[rstest]
fn toggles_survive_a_save(#[values(false, true)] collapse: bool) -> Result<(), eyre::Report> {
    let store = InMemorySettingsStore::new();
    let mut settings = AppSettings::default().with_theme_toggled();
    if collapse {
        settings = settings.with_sidebar_toggled();
    }

    store.save(&settings)?;

    let loaded = store.load()?;
    eyre::ensure!(loaded.theme == Theme::Dark, "theme should be dark");
    eyre::ensure!(
        loaded.sidebar_collapsed == collapse,
        "sidebar state should persist"
    );
    Ok(())
}
