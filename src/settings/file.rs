//! Settings persisted as a JSON file.

use camino::Utf8PathBuf;
use cap_std::fs_utf8::Dir;

use super::{AppSettings, SettingsStore, SettingsStoreError};

/// Stores settings as JSON inside a capability-scoped directory.
#[derive(Debug)]
pub struct JsonFileSettingsStore {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl JsonFileSettingsStore {
    /// Default file name for saved settings.
    pub const DEFAULT_FILE_NAME: &'static str = "settings.json";

    /// Creates a store writing `file_name` inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<AppSettings, SettingsStoreError> {
        let text = match self.dir.read_to_string(&self.file_name) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(AppSettings::default());
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&text).map_err(|err| SettingsStoreError::Malformed(err.to_string()))
    }

    fn save(&self, settings: &AppSettings) -> Result<(), SettingsStoreError> {
        let text = serde_json::to_string_pretty(settings)
            .map_err(|err| SettingsStoreError::Malformed(err.to_string()))?;
        self.dir.write(&self.file_name, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Theme, ViewMode};
    use cap_std::ambient_authority;
    use rstest::{fixture, rstest};

    struct Workspace {
        _temp: tempfile::TempDir,
        store: JsonFileSettingsStore,
    }

    #[fixture]
    fn workspace() -> Workspace {
        let temp = tempfile::tempdir().expect("temporary directory");
        let dir = Dir::open_ambient_dir(
            camino::Utf8Path::from_path(temp.path()).expect("UTF-8 temp path"),
            ambient_authority(),
        )
        .expect("open temporary directory");
        Workspace {
            _temp: temp,
            store: JsonFileSettingsStore::new(dir, JsonFileSettingsStore::DEFAULT_FILE_NAME),
        }
    }

    #[rstest]
    fn missing_file_loads_defaults(workspace: Workspace) {
        let loaded = workspace.store.load().expect("load succeeds");
        assert_eq!(loaded, AppSettings::default());
    }

    #[rstest]
    fn saved_settings_are_reloaded(workspace: Workspace) {
        let settings = AppSettings {
            theme: Theme::Dark,
            view_mode: ViewMode::List,
            sidebar_collapsed: true,
        };

        workspace.store.save(&settings).expect("save succeeds");

        assert_eq!(workspace.store.load().expect("load succeeds"), settings);
    }

    #[rstest]
    fn partial_document_fills_defaults(workspace: Workspace) {
        workspace
            .store
            .dir
            .write(JsonFileSettingsStore::DEFAULT_FILE_NAME, r#"{"theme": "dark"}"#)
            .expect("seed file");

        let loaded = workspace.store.load().expect("load succeeds");

        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.view_mode, ViewMode::Grid);
        assert!(!loaded.sidebar_collapsed);
    }

    #[rstest]
    fn corrupt_document_is_reported(workspace: Workspace) {
        workspace
            .store
            .dir
            .write(JsonFileSettingsStore::DEFAULT_FILE_NAME, "{not json")
            .expect("seed file");

        assert!(matches!(
            workspace.store.load(),
            Err(SettingsStoreError::Malformed(_))
        ));
    }
}
