#[cfg(test)]
mod tests {
    use crate::reply::http::*;
    use chat_core::ports::ReplyPort;
    use chat_types::config::ChatConfig;
    use chat_types::message::*;
    use chat_types::ChatError;

    fn client(base: &str) -> HttpReplyClient {
        HttpReplyClient::new(&ChatConfig::from_env_value(Some(base)))
    }

    // ─── URL Tests ───────────────────────────────────────────

    #[test]
    fn test_reply_url() {
        let c = client("http://localhost:8000");
        assert_eq!(c.reply_url(), "http://localhost:8000/api/reply");
    }

    #[test]
    fn test_messages_url_with_limit() {
        let c = client("https://chat.example.com/");
        assert_eq!(c.messages_url(100), "https://chat.example.com/api/messages?limit=100");
        assert_eq!(c.messages_url(5), "https://chat.example.com/api/messages?limit=5");
    }

    #[test]
    fn test_endpoint_is_base_url() {
        let c = client("http://10.0.0.2:9000");
        assert_eq!(c.endpoint(), "http://10.0.0.2:9000");
    }

    // ─── Request body Tests ──────────────────────────────────

    #[test]
    fn test_request_carries_default_community() {
        let c = client("http://localhost:8000");
        let json = serde_json::to_value(c.build_request("Is there parking?")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Is there parking?",
                "community_id": "sunset-ridge",
            })
        );
    }

    #[test]
    fn test_request_without_community() {
        let mut config = ChatConfig::from_env_value(None);
        config.community_id = None;
        let c = HttpReplyClient::new(&config);
        let json = serde_json::to_value(c.build_request("hi")).unwrap();
        assert!(json.get("community_id").is_none());
        assert!(json.get("lead").is_none());
    }

    // ─── Response parsing Tests ──────────────────────────────

    #[test]
    fn test_parse_reply() {
        let payload = parse_reply(
            r#"{"id":"7f3c","reply":"We have 2 units left.","created_date":"2024-05-01T14:00:00.026490","action":"ask_clarification"}"#,
        )
        .unwrap();
        assert_eq!(payload.id, "7f3c");
        assert_eq!(payload.reply, "We have 2 units left.");
        assert_eq!(payload.action, ActionKind::AskClarification);
    }

    #[test]
    fn test_parse_reply_malformed() {
        assert!(matches!(parse_reply("<html>502</html>"), Err(ChatError::Serialization(_))));
        assert!(matches!(parse_reply(r#"{"id":"x"}"#), Err(ChatError::Serialization(_))));
    }

    #[test]
    fn test_parse_history() {
        let msgs = parse_history(
            r#"{"messages":[
                {"id":"1","message":{"role":"user","content":"hi"},"created_date":"2024-05-01T14:00:00"},
                {"id":"2","message":{"role":"assistant","content":"hello"},"created_date":"2024-05-01T14:00:02"}
            ],"count":2}"#,
        )
        .unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].id, MessageId::Server("1".to_string()));
        assert_eq!(msgs[0].role, Role::User);
        assert_eq!(msgs[1].content, "hello");
    }

    #[test]
    fn test_parse_history_keeps_messages_when_count_disagrees() {
        let msgs = parse_history(
            r#"{"messages":[
                {"id":"1","message":{"role":"user","content":"hi"},"created_date":"2024-05-01T14:00:00"}
            ],"count":5}"#,
        )
        .unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].id, MessageId::Server("1".to_string()));
    }

    #[test]
    fn test_parse_history_empty_object() {
        assert!(parse_history("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_history_not_json() {
        assert!(parse_history("").is_err());
    }
}
