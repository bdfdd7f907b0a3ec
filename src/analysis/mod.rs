// src/analysis/mod.rs
pub mod geometry;
pub mod period;

// Re-export commonly used types
pub use period::{filter_by_period, Metric, Period};
pub use geometry::{pie_slices, radar_polygon};
