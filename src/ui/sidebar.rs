// src/ui/sidebar.rs
use eframe::egui::{self, RichText, Stroke};
use crate::data::{NAV_ENTRIES, OWNER_NAME, OWNER_ROLE, PROFILE_NAME, PROFILE_ROLE};
use crate::state::{Action, DashboardState};
use super::theme::Palette;

pub const EXPANDED_WIDTH: f32 = 256.0;
pub const COLLAPSED_WIDTH: f32 = 64.0;

/// Sidebar width for an open/closed animation progress in `0.0..=1.0`.
pub fn sidebar_width(progress: f32) -> f32 {
    egui::lerp(COLLAPSED_WIDTH..=EXPANDED_WIDTH, progress.clamp(0.0, 1.0))
}

pub fn show_sidebar(
    ctx: &egui::Context,
    state: &DashboardState,
    palette: &Palette,
    actions: &mut Vec<Action>,
) {
    let progress = ctx.animate_bool_with_time(egui::Id::new("sidebar_open"), state.sidebar_open, 0.25);
    // Labels only once there is room for them
    let show_labels = progress > 0.6;

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(sidebar_width(progress))
        .frame(
            egui::Frame::none()
                .fill(palette.sidebar_bg)
                .stroke(Stroke::new(1.0, palette.border))
                .inner_margin(egui::Margin::symmetric(8.0, 16.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(palette.nav_highlight)
                    .stroke(Stroke::new(1.0, palette.border))
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new("☰").size(16.0));
                    });

                if show_labels {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(OWNER_NAME).strong().size(13.0).color(palette.heading));
                        ui.label(RichText::new(OWNER_ROLE).small().color(palette.subtle_text));
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let arrow = if state.sidebar_open { "⬅" } else { "➡" };
                    let toggle = ui
                        .add(egui::Button::new(RichText::new(arrow).color(palette.subtle_text)).frame(false))
                        .on_hover_text("Alternar sidebar");
                    if toggle.clicked() {
                        actions.push(Action::ToggleSidebar);
                    }
                });
            });

            ui.add_space(16.0);

            for entry in NAV_ENTRIES.iter() {
                let selected = state.selected_nav == entry.key;
                let text = if show_labels {
                    format!("{}  {}", entry.icon, entry.label)
                } else {
                    entry.icon.to_string()
                };

                let fill = if selected { palette.hover_bg } else { egui::Color32::TRANSPARENT };
                let button = egui::Button::new(RichText::new(text).size(14.0))
                    .fill(fill)
                    .stroke(Stroke::NONE)
                    .rounding(8.0)
                    .min_size(egui::vec2(ui.available_width(), 32.0));

                let response = ui.add(button).on_hover_text(entry.label);
                if response.clicked() {
                    actions.push(Action::SelectNav(entry.key));
                }
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.horizontal(|ui| {
                    egui::Frame::none()
                        .fill(palette.nav_highlight)
                        .stroke(Stroke::new(1.0, palette.border))
                        .rounding(20.0)
                        .inner_margin(egui::Margin::same(10.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new("👤").size(16.0));
                        });

                    if show_labels {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(PROFILE_NAME).strong().color(palette.heading));
                            ui.label(RichText::new(PROFILE_ROLE).small().color(palette.subtle_text));
                        });
                    }
                });
                ui.separator();
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_interpolates_between_bounds() {
        assert_eq!(sidebar_width(0.0), COLLAPSED_WIDTH);
        assert_eq!(sidebar_width(1.0), EXPANDED_WIDTH);
        assert_eq!(sidebar_width(0.5), (COLLAPSED_WIDTH + EXPANDED_WIDTH) / 2.0);
        assert_eq!(sidebar_width(2.0), EXPANDED_WIDTH);
    }
}
