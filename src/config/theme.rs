// src/config/theme.rs
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// On-disk preference record. The theme stays a plain string so that a
/// hand-edited or stale value is reported instead of failing the whole parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub theme: String,
}

impl From<ThemePreference> for Preferences {
    fn from(theme: ThemePreference) -> Self {
        Self { theme: theme.as_str().to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_known_values() {
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!(
            "Light".parse::<ThemePreference>(),
            Err(UnknownTheme("Light".to_string()))
        );
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }
}
