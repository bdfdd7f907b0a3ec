// src/file/mod.rs
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, ThemePreference};

pub mod preferences;

pub use preferences::{MemoryPreferenceStore, RonPreferenceStore};

pub const APP_DIR_NAME: &str = "corp-dashboard";
pub const PREFERENCES_FILE_NAME: &str = "preferences.ron";

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize RON: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// No storage location on this machine.
    #[error("preference storage is unavailable")]
    Unavailable,

    #[error("no theme preference stored yet")]
    Missing,

    #[error("unknown theme value {0:?}")]
    InvalidValue(String),

    #[error("preference file error: {0}")]
    File(#[from] FileError),
}

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T, FileError>;
    fn save(&self, data: &T, path: &Path) -> Result<(), FileError>;
}

/// Where the theme preference lives. Implementations report every failure;
/// the fallback policy is up to the caller.
pub trait PreferenceStore {
    fn load(&self) -> Result<ThemePreference, PreferenceError>;
    fn save(&self, value: ThemePreference) -> Result<(), PreferenceError>;
}

/// Startup policy: anything but a clean read means dark.
pub fn load_or_default(store: &dyn PreferenceStore) -> ThemePreference {
    match store.load() {
        Ok(theme) => {
            info!(%theme, "loaded theme preference");
            theme
        }
        Err(PreferenceError::Missing) => {
            debug!("no stored theme, using default");
            ThemePreference::default()
        }
        Err(e) => {
            warn!(error = %e, "failed to load theme preference, using default");
            ThemePreference::default()
        }
    }
}

/// Persists `value`, logging and dropping any failure. No retries.
pub fn save_best_effort(store: &dyn PreferenceStore, value: ThemePreference) {
    match store.save(value) {
        Ok(()) => debug!(theme = %value, "saved theme preference"),
        Err(e) => warn!(error = %e, theme = %value, "failed to save theme preference"),
    }
}

/// The configured path wins; otherwise the file goes under the platform
/// config directory. `Unavailable` when neither exists.
pub fn resolve_preferences_path(
    configured: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, PreferenceError> {
    configured
        .or_else(|| config_dir.map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME)))
        .ok_or(PreferenceError::Unavailable)
}

/// Picks the store for this run: a RON file when a location resolves,
/// memory otherwise.
pub fn open_preference_store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    match resolve_preferences_path(config.preferences_path.clone(), dirs::config_dir()) {
        Ok(path) => {
            info!(path = %path.display(), "using preference file");
            Box::new(RonPreferenceStore::new(path))
        }
        Err(e) => {
            warn!(error = %e, "theme will not persist across restarts");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<ThemePreference, PreferenceError> {
            Err(PreferenceError::Unavailable)
        }

        fn save(&self, _value: ThemePreference) -> Result<(), PreferenceError> {
            Err(PreferenceError::Unavailable)
        }
    }

    #[test]
    fn broken_store_falls_back_to_dark() {
        let store = BrokenStore;
        save_best_effort(&store, ThemePreference::Light);
        assert_eq!(load_or_default(&store), ThemePreference::Dark);
    }

    #[test]
    fn round_trip_through_policy_helpers() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(load_or_default(&store), ThemePreference::Dark);
        save_best_effort(&store, ThemePreference::Light);
        assert_eq!(load_or_default(&store), ThemePreference::Light);
    }

    #[test]
    fn invalid_stored_value_falls_back_to_dark() {
        let store = MemoryPreferenceStore::with_raw("sepia");
        assert!(matches!(store.load(), Err(PreferenceError::InvalidValue(v)) if v == "sepia"));
        assert_eq!(load_or_default(&store), ThemePreference::Dark);
    }

    #[test]
    fn preferences_path_resolution() {
        let configured = PathBuf::from("/tmp/custom.ron");
        let config_dir = PathBuf::from("/home/user/.config");

        assert_eq!(
            resolve_preferences_path(Some(configured.clone()), Some(config_dir.clone())).unwrap(),
            configured
        );
        assert_eq!(
            resolve_preferences_path(None, Some(config_dir.clone())).unwrap(),
            config_dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME)
        );
        assert!(matches!(
            resolve_preferences_path(None, None),
            Err(PreferenceError::Unavailable)
        ));
    }

    #[test]
    fn configured_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.ron");
        let config = AppConfig {
            preferences_path: Some(path.clone()),
            ..AppConfig::default()
        };

        let store = open_preference_store(&config);
        store.save(ThemePreference::Light).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), ThemePreference::Light);
    }
}
