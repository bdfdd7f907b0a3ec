// src/state/action.rs
use super::DashboardState;
use crate::analysis::{Metric, Period};
use crate::data::NAV_ENTRIES;

/// A single user interaction. Widgets emit these; only `reduce` applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleSidebar,
    ToggleTheme,
    SetPeriod(Period),
    SetMetric(Metric),
    SetQuery(String),
    SelectNav(&'static str),
}

pub fn reduce(state: DashboardState, action: Action) -> DashboardState {
    match action {
        Action::ToggleSidebar => DashboardState {
            sidebar_open: !state.sidebar_open,
            ..state
        },
        Action::ToggleTheme => DashboardState {
            theme: state.theme.toggled(),
            ..state
        },
        Action::SetPeriod(period) => DashboardState { period, ..state },
        Action::SetMetric(metric) => DashboardState { metric, ..state },
        Action::SetQuery(query) => DashboardState { query, ..state },
        Action::SelectNav(key) => {
            // Unknown keys leave the highlight where it was.
            match NAV_ENTRIES.iter().find(|entry| entry.key == key) {
                Some(entry) => DashboardState {
                    selected_nav: entry.key,
                    ..state
                },
                None => state,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemePreference;

    #[test]
    fn theme_toggle_round_trips() {
        let start = DashboardState::default();
        let once = reduce(start.clone(), Action::ToggleTheme);
        assert_eq!(once.theme, ThemePreference::Light);
        let twice = reduce(once, Action::ToggleTheme);
        assert_eq!(twice, start);
    }

    #[test]
    fn sidebar_toggle_flips_only_sidebar() {
        let start = DashboardState::default();
        let next = reduce(start.clone(), Action::ToggleSidebar);
        assert!(!next.sidebar_open);
        assert_eq!(DashboardState { sidebar_open: true, ..next }, start);
    }

    #[test]
    fn metric_does_not_change_filtered_rows() {
        for period in Period::ALL {
            let base = reduce(DashboardState::default(), Action::SetPeriod(period));
            let rows = base.filtered();
            for metric in Metric::ALL {
                let next = reduce(base.clone(), Action::SetMetric(metric));
                assert_eq!(next.metric, metric);
                assert_eq!(next.filtered(), rows);
            }
        }
    }

    #[test]
    fn selectors_set_values_directly() {
        let state = reduce(DashboardState::default(), Action::SetPeriod(Period::SecondHalf));
        assert_eq!(state.period, Period::SecondHalf);
        let state = reduce(state, Action::SetQuery("lucro".to_string()));
        assert_eq!(state.query, "lucro");
        assert_eq!(state.period, Period::SecondHalf);
    }

    #[test]
    fn nav_selection_ignores_unknown_keys() {
        let state = reduce(DashboardState::default(), Action::SelectNav("ranking"));
        assert_eq!(state.selected_nav, "ranking");
        let state = reduce(state, Action::SelectNav("nope"));
        assert_eq!(state.selected_nav, "ranking");
    }
}
