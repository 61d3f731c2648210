#[cfg(test)]
mod tests {
    use crate::format::*;
    use crate::panels::chat::{dot_lift, list_height};
    use crate::state::*;
    use chat_types::event::ChatEvent;
    use chat_types::message::{parse_timestamp, ActionKind};
    use chrono::{Local, TimeZone, Utc};

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert_eq!(state.status_text, "Ready");
        assert!(!state.status_is_error);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_take_input_trims_and_clears() {
        let mut state = UiState::new();
        state.input_text = "  Is there parking?  ".to_string();
        assert_eq!(state.take_input(), Some("Is there parking?".to_string()));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_input_blank_keeps_text() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert_eq!(state.take_input(), None);
        assert_eq!(state.input_text, "   ");
    }

    #[test]
    fn test_process_history_loaded() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::HistoryLoaded { count: 12 }]);
        assert_eq!(state.status_text, "Loaded 12 messages");

        state.process_events(vec![ChatEvent::HistoryLoaded { count: 1 }]);
        assert_eq!(state.status_text, "Loaded 1 message");
    }

    #[test]
    fn test_process_history_failed_is_not_an_error() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::HistoryFailed {
            message: "offline".to_string(),
        }]);
        assert!(!state.status_is_error);
        assert_eq!(state.status_text, "Ready (no history)");
    }

    #[test]
    fn test_process_send_failed_then_reply() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::SendFailed {
            message: "HTTP 500".to_string(),
        }]);
        assert!(state.status_is_error);
        assert_eq!(state.status_text, "Failed to get response from server");

        state.process_events(vec![ChatEvent::ReplyReceived {
            id: "srv-1".to_string(),
            action: Some(ActionKind::ProposeTour),
        }]);
        assert!(!state.status_is_error);
        assert_eq!(state.status_text, "Tour proposed");
    }

    #[test]
    fn test_answer_tour_confirm() {
        let mut state = UiState::new();
        let at = Utc.with_ymd_and_hms(2024, 5, 3, 15, 0, 0).unwrap();
        let notice = state.answer_tour(&ChatAction::ConfirmTour(at)).unwrap();
        assert!(notice.starts_with("Tour confirmed for "));
        assert!(notice.ends_with("We'll send you a confirmation email shortly."));
        assert_eq!(state.notice.as_deref(), Some(notice.as_str()));
    }

    #[test]
    fn test_answer_tour_decline() {
        let mut state = UiState::new();
        let notice = state.answer_tour(&ChatAction::DeclineTour).unwrap();
        assert_eq!(notice, TOUR_DECLINED_MESSAGE);
    }

    #[test]
    fn test_answer_tour_ignores_other_actions() {
        let mut state = UiState::new();
        assert!(state.answer_tour(&ChatAction::Submit("hi".to_string())).is_none());
        assert!(state.answer_tour(&ChatAction::None).is_none());
        assert!(state.notice.is_none());
    }

    // ─── Format Tests ────────────────────────────────────────

    #[test]
    fn test_format_clock() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&dt), "09:05");
    }

    #[test]
    fn test_format_tour_proposal() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 3, 15, 0, 0).unwrap();
        assert_eq!(format_tour_proposal(&dt), "Proposed tour: Friday, May 3 at 3:00 PM");
    }

    #[test]
    fn test_format_tour_proposal_morning() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 16, 9, 30, 0).unwrap();
        assert_eq!(format_tour_proposal(&dt), "Proposed tour: Monday, Dec 16 at 9:30 AM");
    }

    #[test]
    fn test_tour_confirmed_message() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 3, 15, 0, 0).unwrap();
        assert_eq!(
            tour_confirmed_message(&dt),
            "Tour confirmed for Friday, May 3, 03:00 PM! We'll send you a confirmation email shortly."
        );
    }

    #[test]
    fn test_naive_service_tour_time_shows_wall_clock_hour() {
        let at = parse_timestamp("2024-05-03T11:00:00").unwrap();
        assert_eq!(
            format_tour_proposal(&at.with_timezone(&Local)),
            "Proposed tour: Friday, May 3 at 11:00 AM"
        );
        assert!(tour_confirmed_message(&at.with_timezone(&Local))
            .starts_with("Tour confirmed for Friday, May 3, 11:00 AM!"));
    }

    // ─── Layout Tests ────────────────────────────────────────

    #[test]
    fn test_list_height_reserves_input_area() {
        assert_eq!(list_height(464.0), 400.0);
    }

    #[test]
    fn test_list_height_never_negative() {
        assert_eq!(list_height(20.0), 0.0);
        assert_eq!(list_height(0.0), 0.0);
    }

    // ─── Typing indicator Tests ──────────────────────────────

    #[test]
    fn test_dot_lift_bounds() {
        for step in 0..140 {
            let time = step as f64 * 0.01;
            for i in 0..3 {
                let lift = dot_lift(time, i);
                assert!((0.0..=5.0).contains(&lift), "lift {} out of range", lift);
            }
        }
    }

    #[test]
    fn test_dot_lift_is_staggered() {
        // Dot 0 peaks at 0.42s; dot 1 is still rising
        let a = dot_lift(0.42, 0);
        let b = dot_lift(0.42, 1);
        assert!(a > b);
        assert_eq!(dot_lift(1.0, 0), 0.0);
    }
}
