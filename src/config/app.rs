// src/config/app.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "dashboard";
pub const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    /// Overrides the platform config directory for `preferences.ron`.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Painel Corporativo".to_string(),
            window_width: 1440.0,
            window_height: 900.0,
            log_filter: "info".to_string(),
            preferences_path: None,
        }
    }
}

/// Defaults, then an optional `dashboard.toml`, then `DASHBOARD_*` variables.
pub fn load_app_config() -> Result<AppConfig> {
    load_app_config_from(CONFIG_FILE, None)
}

/// Same layering with an explicit file stem; `env` replaces the process
/// environment when given.
pub fn load_app_config_from(file: &str, env: Option<HashMap<String, String>>) -> Result<AppConfig> {
    let defaults = AppConfig::default();
    let settings = config::Config::builder()
        .set_default("title", defaults.title)?
        .set_default("window_width", defaults.window_width as f64)?
        .set_default("window_height", defaults.window_height as f64)?
        .set_default("log_filter", defaults.log_filter)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        )
        .build()
        .context("Failed to build dashboard configuration")?;

    settings
        .try_deserialize()
        .context("Failed to parse dashboard configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn absent_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("dashboard");
        let parsed = load_app_config_from(stem.to_str().unwrap(), env(&[])).unwrap();

        let defaults = AppConfig::default();
        assert_eq!(parsed.title, defaults.title);
        assert_eq!(parsed.window_width, defaults.window_width);
        assert_eq!(parsed.log_filter, defaults.log_filter);
        assert!(parsed.preferences_path.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("dashboard");
        let parsed = load_app_config_from(
            stem.to_str().unwrap(),
            env(&[
                ("DASHBOARD_WINDOW_WIDTH", "1200"),
                ("DASHBOARD_TITLE", "Relatório"),
                ("DASHBOARD_PREFERENCES_PATH", "/tmp/dash/prefs.ron"),
                ("UNRELATED_TITLE", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(parsed.window_width, 1200.0);
        assert_eq!(parsed.window_height, AppConfig::default().window_height);
        assert_eq!(parsed.title, "Relatório");
        assert_eq!(parsed.preferences_path, Some(PathBuf::from("/tmp/dash/prefs.ron")));
    }

    #[test]
    fn file_sits_between_defaults_and_environment() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("dashboard.toml"),
            "title = \"Do arquivo\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();
        let stem = dir.path().join("dashboard");

        let parsed = load_app_config_from(stem.to_str().unwrap(), env(&[])).unwrap();
        assert_eq!(parsed.title, "Do arquivo");
        assert_eq!(parsed.log_filter, "debug");

        let parsed = load_app_config_from(
            stem.to_str().unwrap(),
            env(&[("DASHBOARD_LOG_FILTER", "warn")]),
        )
        .unwrap();
        assert_eq!(parsed.title, "Do arquivo");
        assert_eq!(parsed.log_filter, "warn");
    }
}
