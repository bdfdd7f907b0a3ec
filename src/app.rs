// src/app.rs
use eframe::egui;
use tracing::{debug, info};

use crate::file::{load_or_default, save_best_effort, PreferenceStore};
use crate::state::{reduce, Action, DashboardState};
use crate::ui::{apply_visuals, Palette};

pub struct DashboardApp {
    state: DashboardState,
    store: Box<dyn PreferenceStore>,
    // False until the first frame has been drawn
    revealed: bool,
}

impl DashboardApp {
    pub fn new(ctx: &egui::Context, store: Box<dyn PreferenceStore>) -> Self {
        let theme = load_or_default(store.as_ref());
        apply_visuals(ctx, theme);
        info!(%theme, "dashboard started");

        Self {
            state: DashboardState::new(theme),
            store,
            revealed: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Applies `actions` in order. Theme changes are persisted immediately
    /// and restyle the context.
    pub fn dispatch(&mut self, ctx: &egui::Context, actions: Vec<Action>) {
        for action in actions {
            let previous = self.state.clone();
            debug!(?action, "dispatch");
            self.state = reduce(std::mem::take(&mut self.state), action);

            if self.state.theme != previous.theme {
                save_best_effort(self.store.as_ref(), self.state.theme);
                apply_visuals(ctx, self.state.theme);
            }
            if self.state.period != previous.period {
                debug!(period = ?self.state.period, rows = self.state.filtered().len(), "period changed");
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let palette = Palette::for_theme(self.state.theme);
        let mut actions = Vec::new();

        crate::ui::sidebar::show_sidebar(ctx, &self.state, &palette, &mut actions);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.root_bg).inner_margin(egui::Margin::same(24.0)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("dashboard_scroll")
                    .show(ui, |ui| {
                        crate::ui::header::show_header(ui, &self.state, &palette, &mut actions);
                        crate::ui::cards::show_summary_cards(ui, &palette, self.revealed);
                        crate::ui::charts::show_chart_grid(ui, &self.state, &palette);
                        crate::ui::header::show_footer(ui, &palette);
                    });
            });

        self.revealed = true;
        self.dispatch(ctx, actions);
    }
}
