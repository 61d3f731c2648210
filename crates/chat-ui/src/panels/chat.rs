//! Chat panel — message list, typing indicator, tour buttons and input field.

use egui::{self, Align, Button, Layout, RichText, ScrollArea, Sense, Vec2};
use chrono::Local;
use chat_core::conversation::Conversation;
use chat_types::message::{Message, Role};

use crate::format::{format_clock, format_tour_proposal};
use crate::state::{ChatAction, UiState};
use crate::theme::*;

/// Period of one typing-dot bounce, in seconds
const BOUNCE_PERIOD: f64 = 1.4;
/// Delay between neighbouring dots, in seconds
const BOUNCE_STAGGER: f64 = 0.2;
const BOUNCE_HEIGHT: f32 = 5.0;
const INPUT_AREA_HEIGHT: f32 = 64.0;

/// Render the chat panel. Returns what the user did this frame.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, conversation: &Conversation) -> ChatAction {
    let mut action = ChatAction::None;

    ui.vertical(|ui| {
        // Leave room for the separator, notice and input row
        let height = list_height(ui.available_height());
        ScrollArea::vertical()
            .max_height(height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in conversation.messages() {
                    if msg.is_typing() {
                        render_typing(ui);
                    } else if let Some(a) = render_message(ui, msg) {
                        action = a;
                    }
                    ui.add_space(4.0);
                }
            });

        ui.separator();

        if let Some(notice) = &state.notice {
            ui.label(RichText::new(notice).color(TEXT_SECONDARY).small());
        }

        // Keep the dots moving until the reply lands
        if conversation.has_typing_indicator() {
            ui.ctx().request_repaint();
        }

        if let Some(text) = input_row(ui, state, conversation.can_submit()) {
            action = ChatAction::Submit(text);
        }
    });

    action
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState, enabled: bool) -> Option<String> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Type your message...")
            .desired_width(ui.available_width() - 90.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add_enabled(enabled, input);

        let send_enabled = enabled && !state.input_text.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                .fill(if send_enabled { ACCENT } else { BG_DISABLED })
                .corner_radius(BUBBLE_ROUNDING)
                .min_size(Vec2::new(80.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if send_enabled && (enter || send_btn.clicked()) {
            submitted = state.take_input();
            response.request_focus();
        }
    });

    submitted
}

fn render_message(ui: &mut egui::Ui, msg: &Message) -> Option<ChatAction> {
    let is_user = msg.role == Role::User;
    let (align, fill, text_color, label) = if is_user {
        (Align::Max, ACCENT, TEXT_ON_ACCENT, "You")
    } else {
        (Align::Min, BG_ASSISTANT, TEXT_PRIMARY, "Assistant")
    };
    let mut action = None;

    ui.with_layout(Layout::top_down(align), |ui| {
        let max_width = ui.available_width() * BUBBLE_MAX_WIDTH;
        ui.label(
            RichText::new(label)
                .color(if is_user { ACCENT } else { SECONDARY })
                .strong()
                .small(),
        );

        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(RichText::new(&msg.content).color(text_color));
            });

        // Tour buttons render only when a tour time came with the proposal
        if let Some(at) = msg.propose_time().filter(|_| !is_user) {
            let local = at.with_timezone(&Local);
            ui.label(
                RichText::new(format_tour_proposal(&local))
                    .color(TEXT_SECONDARY)
                    .strong(),
            );
            ui.horizontal(|ui| {
                let confirm = Button::new(RichText::new("Confirm Tour").color(TEXT_ON_ACCENT))
                    .fill(ACCENT)
                    .corner_radius(BUBBLE_ROUNDING);
                if ui.add(confirm).clicked() {
                    action = Some(ChatAction::ConfirmTour(at));
                }
                let deny = Button::new(RichText::new("Not Available").color(ACCENT))
                    .corner_radius(BUBBLE_ROUNDING);
                if ui.add(deny).clicked() {
                    action = Some(ChatAction::DeclineTour);
                }
            });
        }

        if let Some(ts) = msg.timestamp() {
            ui.label(
                RichText::new(format_clock(&ts.with_timezone(&Local)))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        }
    });

    action
}

fn render_typing(ui: &mut egui::Ui) {
    ui.with_layout(Layout::top_down(Align::Min), |ui| {
        egui::Frame::default()
            .fill(BG_ASSISTANT)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(36.0, 16.0), Sense::hover());
                let time = ui.input(|i| i.time);
                for i in 0..3 {
                    let center = egui::pos2(
                        rect.left() + 6.0 + i as f32 * 12.0,
                        rect.bottom() - 4.0 - dot_lift(time, i),
                    );
                    ui.painter().circle_filled(center, 3.0, TEXT_SECONDARY);
                }
            });
        ui.label(RichText::new("AI is typing...").color(TEXT_SECONDARY).small());
    });
}

/// Height left for the message list once the input area is reserved
pub fn list_height(available: f32) -> f32 {
    (available - INPUT_AREA_HEIGHT).max(0.0)
}

/// Height of typing dot `index` at `time`: a hop during the first 60% of
/// each period, resting otherwise.
pub fn dot_lift(time: f64, index: usize) -> f32 {
    let t = (time - index as f64 * BOUNCE_STAGGER).rem_euclid(BOUNCE_PERIOD) / BOUNCE_PERIOD;
    if t < 0.6 {
        (t / 0.6 * std::f64::consts::PI).sin() as f32 * BOUNCE_HEIGHT
    } else {
        0.0
    }
}
