//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Covers URL and body construction plus response parsing under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! Live fetch calls need a browser and a running reply service, so they
//! are not exercised here.

use wasm_bindgen_test::*;

use chat_platform::reply::http::{parse_history, parse_reply};
use chat_platform::reply::HttpReplyClient;
use chat_types::config::ChatConfig;
use chat_types::message::ActionKind;

fn client() -> HttpReplyClient {
    HttpReplyClient::new(&ChatConfig::from_env_value(Some("http://localhost:8000")))
}

#[wasm_bindgen_test]
fn reply_url() {
    assert_eq!(client().reply_url(), "http://localhost:8000/api/reply");
}

#[wasm_bindgen_test]
fn messages_url_default_limit() {
    let config = ChatConfig::from_env_value(None);
    assert_eq!(
        client().messages_url(config.history_limit),
        "http://localhost:8000/api/messages?limit=100"
    );
}

#[wasm_bindgen_test]
fn request_body_has_community() {
    let req = client().build_request("hello");
    assert_eq!(req.message, "hello");
    assert_eq!(req.community_id.as_deref(), Some("sunset-ridge"));
}

#[wasm_bindgen_test]
fn parse_tour_reply() {
    let payload = parse_reply(
        r#"{"id":"a","reply":"Friday at 3?","created_date":"2024-05-01T14:00:00",
            "action":"propose_tour","propose_time":"2024-05-03T15:00:00"}"#,
    )
    .unwrap();
    assert_eq!(payload.action, ActionKind::ProposeTour);
    assert!(payload.to_message().propose_time().is_some());
}

#[wasm_bindgen_test]
fn parse_history_missing_field() {
    assert!(parse_history(r#"{"count":0}"#).unwrap().is_empty());
}
