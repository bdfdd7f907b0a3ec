// src/ui/theme.rs
use eframe::egui::{self, Color32, FontId, Sense, Stroke, Vec2};
use crate::config::ThemePreference;

// Series colours, shared by both themes
pub const PRIMARY: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);
pub const PURPLE: Color32 = Color32::from_rgb(0x7c, 0x3a, 0xed);
pub const CYAN: Color32 = Color32::from_rgb(0x06, 0xb6, 0xd4);
pub const VIOLET: Color32 = Color32::from_rgb(0x8b, 0x5c, 0xf6);
pub const LINK: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

pub const SHARE_COLORS: [Color32; 5] = [
    PRIMARY,
    PURPLE,
    Color32::from_rgb(0xe8, 0x79, 0xf9),
    CYAN,
    Color32::from_rgb(0xa7, 0x8b, 0xfa),
];

/// Colours for one theme. Everything the view paints comes from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub root_bg: Color32,
    pub sidebar_bg: Color32,
    pub card_bg: Color32,
    pub border: Color32,
    pub input_bg: Color32,
    pub nav_highlight: Color32,
    pub hover_bg: Color32,
    pub text: Color32,
    pub heading: Color32,
    pub subtle_text: Color32,
    pub grid: Color32,
    pub toggle_track: Color32,
    pub card_accents: [Color32; 4],
}

impl Palette {
    pub const DARK: Palette = Palette {
        root_bg: Color32::from_rgb(0x07, 0x10, 0x22),
        sidebar_bg: Color32::from_rgb(0x0b, 0x12, 0x20),
        card_bg: Color32::from_rgb(0x07, 0x18, 0x27),
        border: Color32::from_rgb(0x1e, 0x29, 0x3b),
        input_bg: Color32::from_rgb(0x0b, 0x16, 0x24),
        nav_highlight: Color32::from_rgb(0x08, 0x18, 0x27),
        hover_bg: Color32::from_rgb(0x1e, 0x29, 0x3b),
        text: Color32::from_rgb(0xf1, 0xf5, 0xf9),
        heading: Color32::WHITE,
        subtle_text: Color32::from_rgb(0x94, 0xa3, 0xb8),
        grid: Color32::from_rgb(0x07, 0x26, 0x39),
        toggle_track: Color32::from_rgb(0x33, 0x41, 0x55),
        card_accents: [
            Color32::from_rgb(0x02, 0x84, 0xc7),
            Color32::from_rgb(0x05, 0x96, 0x69),
            Color32::from_rgb(0x7c, 0x3a, 0xed),
            Color32::from_rgb(0x47, 0x55, 0x69),
        ],
    };

    pub const LIGHT: Palette = Palette {
        root_bg: Color32::from_rgb(0xe3, 0xe5, 0xe8),
        sidebar_bg: Color32::WHITE,
        card_bg: Color32::WHITE,
        border: Color32::from_rgb(0xe5, 0xe7, 0xeb),
        input_bg: Color32::WHITE,
        nav_highlight: Color32::from_rgb(0xf3, 0xf4, 0xf6),
        hover_bg: Color32::from_rgb(0xf3, 0xf4, 0xf6),
        text: Color32::from_rgb(0x11, 0x18, 0x27),
        heading: Color32::from_rgb(0x11, 0x18, 0x27),
        subtle_text: Color32::from_rgb(0x6b, 0x72, 0x80),
        grid: Color32::from_rgb(0xee, 0xf2, 0xf6),
        toggle_track: Color32::from_rgb(0xe5, 0xe7, 0xeb),
        card_accents: [
            Color32::from_rgb(0x60, 0xa5, 0xfa),
            Color32::from_rgb(0x34, 0xd3, 0x99),
            Color32::from_rgb(0xa7, 0x8b, 0xfa),
            Color32::from_rgb(0x9c, 0xa3, 0xaf),
        ],
    };

    pub fn for_theme(theme: ThemePreference) -> Palette {
        match theme {
            ThemePreference::Dark => Palette::DARK,
            ThemePreference::Light => Palette::LIGHT,
        }
    }
}

pub fn apply_visuals(ctx: &egui::Context, theme: ThemePreference) {
    let palette = Palette::for_theme(theme);
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = palette.root_bg;
    visuals.window_fill = palette.card_bg;
    visuals.extreme_bg_color = palette.input_bg;
    visuals.faint_bg_color = palette.nav_highlight;
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = LINK;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    ctx.set_visuals(visuals);
}

const MOON_INK: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
const SUN_INK: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);

/// Glyph riding on the knob at slide `progress` (0 = dark, 1 = light).
/// The icon swaps at the midpoint and fades out towards it from either side.
pub fn toggle_glyph(progress: f32) -> (&'static str, Color32) {
    let progress = progress.clamp(0.0, 1.0);
    let strength = ((progress - 0.5).abs() * 2.0).max(0.35);
    if progress < 0.5 {
        ("☾", MOON_INK.gamma_multiply(strength))
    } else {
        ("☀", SUN_INK.gamma_multiply(strength))
    }
}

/// Pill switch with a sliding knob carrying a moon in dark mode and a sun
/// in light mode.
pub fn theme_toggle(ui: &mut egui::Ui, theme: ThemePreference, palette: &Palette) -> egui::Response {
    let size = Vec2::new(44.0, 24.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let response = response.on_hover_text("Alternar tema");

    if ui.is_rect_visible(rect) {
        let light = ui.ctx().animate_bool(response.id, !theme.is_dark());
        let radius = rect.height() / 2.0;
        let painter = ui.painter();

        painter.rect(rect, radius, palette.toggle_track, Stroke::new(1.0, palette.border));

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), light);
        let knob = egui::pos2(knob_x, rect.center().y);
        painter.circle_filled(knob, radius - 2.0, Color32::WHITE);

        let (glyph, ink) = toggle_glyph(light);
        painter.text(knob, egui::Align2::CENTER_CENTER, glyph, FontId::proportional(12.0), ink);
    }

    response
}
