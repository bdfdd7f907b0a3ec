// src/state/mod.rs
use crate::analysis::{filter_by_period, Metric, Period};
use crate::config::ThemePreference;
use crate::data::{TimeSeriesRecord, NAV_ENTRIES, TIME_SERIES};

pub mod action;

pub use action::{reduce, Action};

/// Everything the view reads. Lives for one run of the app; only `theme`
/// survives a restart, through the preference store.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub sidebar_open: bool,
    pub period: Period,
    pub metric: Metric,
    pub query: String,
    pub theme: ThemePreference,
    pub selected_nav: &'static str,
}

impl DashboardState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            sidebar_open: true,
            period: Period::All,
            metric: Metric::Sales,
            query: String::new(),
            theme,
            selected_nav: NAV_ENTRIES[0].key,
        }
    }

    /// Records for the current period.
    pub fn filtered(&self) -> &'static [TimeSeriesRecord] {
        filter_by_period(&TIME_SERIES, self.period)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}
