//! WASM-target tests for chat-ui.
//!
//! Covers formatting and UiState transitions under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_types::event::ChatEvent;
use chat_ui::format::*;
use chat_ui::panels::chat::dot_lift;
use chat_ui::state::{ChatAction, UiState};
use chrono::{TimeZone, Utc};

#[wasm_bindgen_test]
fn wasm_format_tour_proposal() {
    let dt = Utc.with_ymd_and_hms(2024, 5, 3, 15, 0, 0).unwrap();
    assert_eq!(format_tour_proposal(&dt), "Proposed tour: Friday, May 3 at 3:00 PM");
    assert_eq!(format_clock(&dt), "15:00");
}

#[wasm_bindgen_test]
fn wasm_take_input() {
    let mut state = UiState::new();
    state.input_text = " hello ".to_string();
    assert_eq!(state.take_input(), Some("hello".to_string()));
    assert_eq!(state.take_input(), None);
}

#[wasm_bindgen_test]
fn wasm_send_failed_sets_error_status() {
    let mut state = UiState::new();
    state.process_events(vec![ChatEvent::SendFailed {
        message: "offline".to_string(),
    }]);
    assert!(state.status_is_error);
}

#[wasm_bindgen_test]
fn wasm_decline_tour_notice() {
    let mut state = UiState::new();
    let notice = state.answer_tour(&ChatAction::DeclineTour);
    assert_eq!(notice.as_deref(), Some(TOUR_DECLINED_MESSAGE));
}

#[wasm_bindgen_test]
fn wasm_dot_lift_rests_after_cycle() {
    assert_eq!(dot_lift(1.0, 0), 0.0);
}
