// src/ui/mod.rs
pub mod cards;
pub mod charts;
pub mod header;
pub mod sidebar;
pub mod theme;

pub use theme::{apply_visuals, Palette};
