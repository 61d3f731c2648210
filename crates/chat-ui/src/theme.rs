//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 250, 250);
pub const BG_PAPER: Color32 = Color32::WHITE;
pub const BG_ASSISTANT: Color32 = Color32::from_rgb(245, 245, 245);
pub const BG_DISABLED: Color32 = Color32::from_rgb(224, 224, 224);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 33, 33);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(117, 117, 117);
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;
pub const ACCENT: Color32 = Color32::from_rgb(25, 118, 210);
pub const SECONDARY: Color32 = Color32::from_rgb(156, 39, 176);
pub const ERROR: Color32 = Color32::from_rgb(211, 47, 47);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);
/// Bubbles never exceed this share of the list width
pub const BUBBLE_MAX_WIDTH: f32 = 0.7;

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PAPER;
    style.visuals.extreme_bg_color = BG_PAPER;

    style.visuals.widgets.inactive.bg_fill = BG_DISABLED;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
