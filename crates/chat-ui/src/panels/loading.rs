//! Shown in place of the conversation until the history fetch settles.

use egui::{self, RichText};
use crate::theme::*;

pub fn loading_panel(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.add(egui::Spinner::new().size(40.0).color(ACCENT));
        ui.add_space(12.0);
        ui.label(RichText::new("Loading chat history...").color(TEXT_SECONDARY));
    });
}
