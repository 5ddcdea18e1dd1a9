//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(3, 7, 18);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_CARD: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 13);
pub const BG_SURFACE: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(96, 165, 250);
pub const INDIGO: Color32 = Color32::from_rgb(99, 102, 241);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const PARTICLE: Color32 = Color32::from_rgb(59, 130, 246);

pub const CARD_ROUNDING: CornerRadius = CornerRadius::same(24);
pub const PILL_ROUNDING: CornerRadius = CornerRadius::same(255);
pub const CHIP_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(24.0, 16.0);

/// Widest the page content is allowed to grow
pub const CONTENT_WIDTH: f32 = 1100.0;

/// Below this width the nav collapses into the menu button
pub const NARROW_WIDTH: f32 = 768.0;

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_white_alpha(26))
}

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    style.visuals.hyperlink_color = ACCENT_LIGHT;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.weak_bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.weak_bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_LIGHT);

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);
    style.spacing.button_padding = Vec2::new(14.0, 8.0);

    ctx.set_style(style);
}
