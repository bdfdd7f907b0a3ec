// src/ui/header.rs
use eframe::egui::{self, RichText, Stroke};
use crate::analysis::{Metric, Period};
use crate::data::{PROFILE_HANDLE, PROFILE_URL};
use crate::state::{Action, DashboardState};
use super::theme::{theme_toggle, Palette};

pub fn show_header(
    ui: &mut egui::Ui,
    state: &DashboardState,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    egui::Frame::none()
        .fill(palette.nav_highlight)
        .rounding(8.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Painel Corporativo").size(24.0).strong().color(palette.heading));
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Visão consolidada • dados simulados").color(palette.subtle_text));
                        ui.label(RichText::new("•").color(palette.subtle_text));
                        ui.hyperlink_to(PROFILE_HANDLE, PROFILE_URL);
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Right to left: the toggle ends up before the search box.
                    metric_selector(ui, state.metric, palette, actions);
                    period_selector(ui, state.period, palette, actions);
                    search_box(ui, &state.query, palette, actions);
                    if theme_toggle(ui, state.theme, palette).clicked() {
                        actions.push(Action::ToggleTheme);
                    }
                });
            });
        });
}

fn control_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.input_bg)
        .stroke(Stroke::new(1.0, palette.border))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
}

fn search_box(ui: &mut egui::Ui, query: &str, palette: &Palette, actions: &mut Vec<Action>) {
    control_frame(palette).rounding(16.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            let mut text = query.to_string();
            let edit = egui::TextEdit::singleline(&mut text)
                .hint_text("Pesquisar métricas...")
                .frame(false)
                .desired_width(180.0);
            if ui.add(edit).changed() {
                actions.push(Action::SetQuery(text));
            }
            ui.label(RichText::new("🔍").color(palette.subtle_text));
        });
    });
}

fn period_selector(ui: &mut egui::Ui, current: Period, palette: &Palette, actions: &mut Vec<Action>) {
    control_frame(palette).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🕒").color(palette.subtle_text));
            egui::ComboBox::from_id_source("period_selector")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for period in Period::ALL {
                        if ui.selectable_label(current == period, period.label()).clicked() {
                            actions.push(Action::SetPeriod(period));
                        }
                    }
                });
        });
    });
}

fn metric_selector(ui: &mut egui::Ui, current: Metric, palette: &Palette, actions: &mut Vec<Action>) {
    control_frame(palette).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label("Métrica");
            egui::ComboBox::from_id_source("metric_selector")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for metric in Metric::ALL {
                        if ui.selectable_label(current == metric, metric.label()).clicked() {
                            actions.push(Action::SetMetric(metric));
                        }
                    }
                });
        });
    });
}

pub fn show_footer(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(24.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new("Dados simulados • Interface demonstrativa • Rust + egui • Publi:")
                .small()
                .color(palette.subtle_text),
        );
        ui.hyperlink_to(RichText::new(PROFILE_HANDLE).small(), PROFILE_URL);
    });
}
