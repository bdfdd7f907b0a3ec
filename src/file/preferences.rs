// src/file/preferences.rs
use super::{FileError, FileHandler, PreferenceError, PreferenceStore};
use crate::config::{Preferences, ThemePreference};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct PreferencesFileHandler;

impl PreferencesFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<Preferences> for PreferencesFileHandler {
    fn load(&self, path: &Path) -> Result<Preferences, FileError> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    fn save(&self, data: &Preferences, path: &Path) -> Result<(), FileError> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
        )?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

fn parse_theme(raw: &str) -> Result<ThemePreference, PreferenceError> {
    raw.parse()
        .map_err(|_| PreferenceError::InvalidValue(raw.to_string()))
}

/// Theme preference kept in a small RON file, e.g. `(theme: "light")`.
#[derive(Debug)]
pub struct RonPreferenceStore {
    path: PathBuf,
    handler: PreferencesFileHandler,
}

impl RonPreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            handler: PreferencesFileHandler::new(),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for RonPreferenceStore {
    fn load(&self) -> Result<ThemePreference, PreferenceError> {
        match self.handler.load(&self.path) {
            Ok(preferences) => parse_theme(&preferences.theme),
            Err(FileError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Err(PreferenceError::Missing)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, value: ThemePreference) -> Result<(), PreferenceError> {
        self.handler.save(&Preferences::from(value), &self.path)?;
        Ok(())
    }
}

/// Process-local store, used when no config directory exists.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    raw: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<ThemePreference, PreferenceError> {
        match self.raw.borrow().as_deref() {
            Some(raw) => parse_theme(raw),
            None => Err(PreferenceError::Missing),
        }
    }

    fn save(&self, value: ThemePreference) -> Result<(), PreferenceError> {
        *self.raw.borrow_mut() = Some(value.as_str().to_string());
        Ok(())
    }
}
