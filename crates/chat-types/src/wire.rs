//! JSON shapes exchanged with the reply service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::{Action, ActionKind, Message, MessageId, Role};

/// Body of `POST /api/reply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub community_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lead: Option<Map<String, Value>>,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>, community_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            community_id,
            lead: None,
        }
    }
}

/// Successful response of `POST /api/reply`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyPayload {
    pub id: String,
    pub reply: String,
    pub created_date: String,
    #[serde(default)]
    pub action: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub propose_time: Option<String>,
    /// Server-confirmed id for the user's own message, when the service issues one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_message_id: Option<String>,
}

impl ReplyPayload {
    /// The assistant message this reply displays as
    pub fn to_message(&self) -> Message {
        Message {
            id: MessageId::Server(self.id.clone()),
            role: Role::Assistant,
            content: self.reply.clone(),
            created_at: self.created_date.clone(),
            action: Action::from_wire(self.action, self.propose_time.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireContent {
    pub role: Role,
    pub content: String,
}

/// One history item from `GET /api/messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub id: String,
    pub message: WireContent,
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action: Option<ActionKind>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub propose_time: Option<String>,
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        let action = match wire.message.role {
            Role::Assistant => wire
                .action
                .and_then(|kind| Action::from_wire(kind, wire.propose_time.as_deref())),
            Role::User => None,
        };
        Message {
            id: MessageId::Server(wire.id),
            role: wire.message.role,
            content: wire.message.content,
            created_at: wire.created_date,
            action,
        }
    }
}

/// Body of `GET /api/messages`. A missing `messages` field reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<usize>,
}

impl HistoryResponse {
    pub fn into_messages(self) -> Vec<Message> {
        self.messages.into_iter().map(Message::from).collect()
    }
}
