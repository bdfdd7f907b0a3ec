// src/data/records.rs

/// One month of the trend dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesRecord {
    pub label: &'static str,
    pub sales: f64,
    pub revenue: f64,
    pub profit: f64,
    pub users: f64,
}

impl TimeSeriesRecord {
    pub const fn new(label: &'static str, sales: f64, revenue: f64, profit: f64, users: f64) -> Self {
        Self { label, sales, revenue, profit, users }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarScore {
    pub axis: &'static str,
    pub score: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}
