// src/ui/cards.rs
use eframe::egui::{self, Color32, RichText};
use crate::data::{SummaryCard, Trend, SUMMARY_CARDS};
use super::theme::Palette;

const CARD_DURATION: f32 = 0.35;
const CARD_STAGGER: f32 = 0.06;
const CARD_SLIDE: f32 = 10.0;

/// Entrance progress of card `index` given the shared timeline progress
/// `t` in `0.0..=1.0`. Each card starts `CARD_STAGGER` seconds after the
/// previous one and takes `CARD_DURATION` seconds.
pub fn stagger_progress(t: f32, index: usize, count: usize) -> f32 {
    let total = timeline_duration(count);
    let elapsed = t.clamp(0.0, 1.0) * total - index as f32 * CARD_STAGGER;
    (elapsed / CARD_DURATION).clamp(0.0, 1.0)
}

fn timeline_duration(count: usize) -> f32 {
    CARD_DURATION + count.saturating_sub(1) as f32 * CARD_STAGGER
}

/// Delta text colour; light enough to read on every card accent.
pub fn delta_color(trend: Trend) -> Color32 {
    match trend {
        Trend::Up => Color32::from_rgb(0xbb, 0xf7, 0xd0),
        Trend::Down => Color32::from_rgb(0xfe, 0xca, 0xca),
    }
}

/// `revealed` is false on the very first frame so the entrance animates
/// from nothing instead of starting at its end state.
pub fn show_summary_cards(ui: &mut egui::Ui, palette: &Palette, revealed: bool) {
    let count = SUMMARY_CARDS.len();
    let t = ui.ctx().animate_bool_with_time(
        egui::Id::new("summary_cards_intro"),
        revealed,
        timeline_duration(count),
    );

    ui.add_space(16.0);
    ui.columns(count, |columns| {
        for (i, (column, card)) in columns.iter_mut().zip(SUMMARY_CARDS.iter()).enumerate() {
            let progress = stagger_progress(t, i, count);
            summary_card(column, card, palette.card_accents[i % palette.card_accents.len()], progress);
        }
    });
    ui.add_space(16.0);
}

fn summary_card(ui: &mut egui::Ui, card: &SummaryCard, accent: Color32, progress: f32) {
    ui.add_space((1.0 - progress) * CARD_SLIDE);

    let fade = |color: Color32| color.gamma_multiply(progress);
    let response = egui::Frame::none()
        .fill(fade(accent))
        .rounding(12.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(card.title).color(fade(Color32::from_white_alpha(230))));
                    ui.label(RichText::new(card.value).size(22.0).strong().color(fade(Color32::WHITE)));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(RichText::new(card.delta).strong().color(fade(delta_color(card.trend))));
                });
            });
            ui.add_space(8.0);
            ui.label(
                RichText::new("Resumo • últimos 30 dias")
                    .small()
                    .color(fade(Color32::from_white_alpha(180))),
            );
        })
        .response;

    response.on_hover_text(format!("{}: {} ({})", card.title, card.value, card.delta));
}
