//! Client configuration.
//!
//! Settings are read from a TOML file such as:
//!
//! ```toml
//! base_url = "http://127.0.0.1:5000"
//! timeout_secs = 30
//!
//! [routes]
//! history = "/get_task_status_history/{task_id}"
//! ```
//!
//! Every key is optional. Route templates use `{task_id}` and
//! `{employee_id}` placeholders.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "WORKFORCE_API_URL";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`ClientConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Connection settings for the task store and employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the REST backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. When absent the HTTP client's transport default
    /// applies.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Route templates relative to `base_url`.
    #[serde(default)]
    pub routes: RouteTable,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_owned()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            routes: RouteTable::default(),
        }
    }
}

impl ClientConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let text = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_toml(&text)
    }

    /// Applies an override for the base URL, ignoring blank values.
    #[must_use]
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            url.clone_into(&mut self.base_url);
        }
        self
    }

    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Joins `base_url` with a rendered route.
    #[must_use]
    pub fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url.trim_end_matches('/'))
    }
}

/// Route templates for each store operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTable {
    /// `GET` one task.
    pub task: String,
    /// `POST` a new task.
    pub create_task: String,
    /// `GET` the allocation of a task.
    pub allocation: String,
    /// `POST` a new allocation.
    pub allocate: String,
    /// `POST` a status entry.
    pub update_status: String,
    /// `GET` the status history of a task.
    pub history: String,
    /// `GET` one employee.
    pub employee: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            task: "/tasks/{task_id}".to_owned(),
            create_task: "/tasks".to_owned(),
            allocation: "/get_task_allocation/{task_id}".to_owned(),
            allocate: "/allocate_task".to_owned(),
            update_status: "/update_task_status".to_owned(),
            history: "/get_task_status_history/{task_id}".to_owned(),
            employee: "/get_employee_status/{employee_id}".to_owned(),
        }
    }
}

impl RouteTable {
    /// Substitutes `{task_id}` in `template`.
    #[must_use]
    pub fn for_task(template: &str, task_id: &str) -> String {
        template.replace("{task_id}", task_id)
    }

    /// Substitutes `{employee_id}` in `template`.
    #[must_use]
    pub fn for_employee(template: &str, employee_id: &str) -> String {
        template.replace("{employee_id}", employee_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_document_yields_defaults() {
        let config = ClientConfig::from_toml("").expect("empty TOML is valid");
        assert_eq!(config, ClientConfig::default());
        assert!(config.timeout().is_none());
    }

    #[rstest]
    fn partial_routes_keep_remaining_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            base_url = "https://staff.example.com/"
            timeout_secs = 15

            [routes]
            history = "/api/tasks/{task_id}/history"
            "#,
        )
        .expect("valid TOML");

        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.routes.history, "/api/tasks/{task_id}/history");
        assert_eq!(config.routes.allocate, "/allocate_task");
        assert_eq!(
            config.url(&RouteTable::for_task(&config.routes.history, "T100")),
            "https://staff.example.com/api/tasks/T100/history"
        );
    }

    #[rstest]
    fn mistyped_timeout_is_rejected() {
        let result = ClientConfig::from_toml("timeout_secs = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    #[case(Some("http://10.0.0.5:8080"), "http://10.0.0.5:8080")]
    #[case(Some("   "), "http://127.0.0.1:5000")]
    #[case(None, "http://127.0.0.1:5000")]
    fn base_url_override_ignores_blank_values(
        #[case] override_url: Option<&str>,
        #[case] expected: &str,
    ) {
        let config = ClientConfig::default().with_base_url_override(override_url);
        assert_eq!(config.base_url, expected);
    }

    #[rstest]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("workforce.toml");
        std::fs::write(&path, "base_url = \"http://store.internal\"").expect("write config");
        let utf8_path = Utf8Path::from_path(&path).expect("UTF-8 temp path");

        let config = ClientConfig::load(utf8_path).expect("config loads");

        assert_eq!(config.base_url, "http://store.internal");
    }
}
