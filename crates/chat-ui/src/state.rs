//! UI-level state that drives rendering.
//! The conversation itself is owned by the chat controller; this holds only
//! what the view adds on top (input text, status line, tour notices),
//! updated each frame by draining the EventBus.

use chrono::{DateTime, Utc};
use chat_types::event::ChatEvent;
use chat_types::message::ActionKind;

use crate::format::{tour_confirmed_message, TOUR_DECLINED_MESSAGE};

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
    /// Whether the status line reports a failure
    pub status_is_error: bool,
    /// Last tour confirmation/denial notice
    pub notice: Option<String>,
}

/// What the user did in the chat panel this frame
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    None,
    Submit(String),
    ConfirmTour(DateTime<Utc>),
    DeclineTour,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            status_text: "Ready".to_string(),
            status_is_error: false,
            notice: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::HistoryLoaded { count } => {
                    self.status_is_error = false;
                    self.status_text = match count {
                        0 => "Ready".to_string(),
                        1 => "Loaded 1 message".to_string(),
                        n => format!("Loaded {} messages", n),
                    };
                }
                ChatEvent::HistoryFailed { .. } => {
                    self.status_is_error = false;
                    self.status_text = "Ready (no history)".to_string();
                }
                ChatEvent::ReplyReceived { action, .. } => {
                    self.status_is_error = false;
                    self.status_text = match action {
                        Some(ActionKind::ProposeTour) => "Tour proposed".to_string(),
                        Some(ActionKind::HandoffHuman) => "Handed off to a team member".to_string(),
                        _ => "Ready".to_string(),
                    };
                }
                ChatEvent::SendFailed { .. } => {
                    self.status_is_error = true;
                    self.status_text = "Failed to get response from server".to_string();
                }
            }
        }
    }

    /// Take the trimmed input for submission, clearing the field.
    /// Returns `None` for blank input.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input_text.clear();
        Some(text)
    }

    /// Record the user's answer to a tour proposal and return the notice text
    pub fn answer_tour(&mut self, action: &ChatAction) -> Option<String> {
        let notice = match action {
            ChatAction::ConfirmTour(at) => {
                log::info!("Tour confirmed for {}", at.to_rfc3339());
                tour_confirmed_message(&at.with_timezone(&chrono::Local))
            }
            ChatAction::DeclineTour => {
                log::info!("Proposed tour declined");
                TOUR_DECLINED_MESSAGE.to_string()
            }
            _ => return None,
        };
        self.notice = Some(notice.clone());
        Some(notice)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
