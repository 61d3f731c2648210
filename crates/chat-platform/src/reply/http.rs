//! HTTP reply client.
//!
//! Talks to the reply service over browser `fetch()` via gloo-net.
//! Single-shot calls only: no retry, backoff or caching.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use chat_core::ports::ReplyPort;
use chat_types::{
    Result, ChatError,
    config::ChatConfig,
    message::Message,
    wire::{HistoryResponse, ReplyPayload, ReplyRequest},
};

pub const REPLY_PATH: &str = "/api/reply";
pub const MESSAGES_PATH: &str = "/api/messages";

/// Reply service client configured from [`ChatConfig`]
pub struct HttpReplyClient {
    base_url: String,
    community_id: Option<String>,
}

impl HttpReplyClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            community_id: config.community_id.clone(),
        }
    }

    pub fn reply_url(&self) -> String {
        format!("{}{}", self.base_url, REPLY_PATH)
    }

    pub fn messages_url(&self, limit: u32) -> String {
        format!("{}{}?limit={}", self.base_url, MESSAGES_PATH, limit)
    }

    /// Request body for `text`; the configured community is always sent
    pub fn build_request(&self, text: &str) -> ReplyRequest {
        ReplyRequest::new(text, self.community_id.clone())
    }
}

#[async_trait(?Send)]
impl ReplyPort for HttpReplyClient {
    async fn send_message(&self, text: &str) -> Result<ReplyPayload> {
        let body = self.build_request(text);

        let response = Request::post(&self.reply_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let text = read_success_body(response).await?;
        parse_reply(&text)
    }

    async fn fetch_history(&self, limit: u32) -> Result<Vec<Message>> {
        let response = Request::get(&self.messages_url(limit))
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let text = read_success_body(response).await?;
        parse_history(&text)
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}

/// Any non-2xx status is a transport error; the body is not inspected.
async fn read_success_body(response: Response) -> Result<String> {
    if !response.ok() {
        return Err(ChatError::Transport(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }
    response
        .text()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))
}

pub fn parse_reply(body: &str) -> Result<ReplyPayload> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_history(body: &str) -> Result<Vec<Message>> {
    let history: HistoryResponse = serde_json::from_str(body)?;
    match history.count {
        Some(count) if count != history.messages.len() => log::warn!(
            "History response reported {} messages but carried {}",
            count,
            history.messages.len()
        ),
        _ => log::debug!("History response carried {} messages", history.messages.len()),
    }
    Ok(history.into_messages())
}
