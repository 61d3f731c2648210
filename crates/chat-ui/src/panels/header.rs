//! Chat header — title, subtitle and status line.

use egui::{self, Align, Layout, RichText};
use crate::state::UiState;
use crate::theme::*;

pub const DEFAULT_TITLE: &str = "AI Assistant Chat";
pub const DEFAULT_SUBTITLE: &str =
    "Ask me anything! I'm here to help with questions and conversations.";

pub fn header_panel(ui: &mut egui::Ui, state: &UiState) {
    egui::Frame::default()
        .fill(BG_PAPER)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(RichText::new(DEFAULT_TITLE).color(TEXT_PRIMARY).strong());
                    ui.label(RichText::new(DEFAULT_SUBTITLE).color(TEXT_SECONDARY));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let color = if state.status_is_error { ERROR } else { TEXT_SECONDARY };
                    ui.label(RichText::new(&state.status_text).color(color).small());
                });
            });
        });
}
