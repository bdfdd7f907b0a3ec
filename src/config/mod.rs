// src/config/mod.rs
pub mod app;
pub mod theme;

// Re-export commonly used types
pub use app::{AppConfig, load_app_config};
pub use theme::{ThemePreference, Preferences};
