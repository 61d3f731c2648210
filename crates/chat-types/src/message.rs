use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the typing placeholder as rendered
pub const TYPING_SENTINEL_ID: &str = "typing-indicator";

/// Content shown while the assistant is composing
pub const TYPING_PLACEHOLDER: &str = "Typing...";

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Identity of a displayed message.
///
/// Server ids, optimistic ids and the typing sentinel are separate variants,
/// so a server-issued id never matches a local one whatever its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// Issued by the reply service; permanent
    Server(String),
    /// Locally generated for an unconfirmed user message
    Temporary(Uuid),
    /// The reserved "assistant is typing" placeholder
    Typing,
}

impl MessageId {
    pub fn temporary() -> Self {
        MessageId::Temporary(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Server(id) => f.write_str(id),
            MessageId::Temporary(id) => write!(f, "temp-{}", id),
            MessageId::Typing => f.write_str(TYPING_SENTINEL_ID),
        }
    }
}

/// Structured follow-up attached to an assistant reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The assistant proposes a tour at the given time
    ProposeTour { at: DateTime<Utc> },
    AskClarification,
    HandoffHuman,
}

impl Action {
    /// Build from the wire name plus the optional `propose_time` field.
    ///
    /// A tour proposal without a parseable time yields `None`: the
    /// confirm/deny affordance must not render without one.
    pub fn from_wire(kind: ActionKind, propose_time: Option<&str>) -> Option<Self> {
        match kind {
            ActionKind::AskClarification => Some(Action::AskClarification),
            ActionKind::HandoffHuman => Some(Action::HandoffHuman),
            ActionKind::ProposeTour => match propose_time.and_then(parse_timestamp) {
                Some(at) => Some(Action::ProposeTour { at }),
                None => {
                    log::warn!(
                        "Dropping propose_tour action without a valid propose_time: {:?}",
                        propose_time
                    );
                    None
                }
            },
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ProposeTour { .. } => ActionKind::ProposeTour,
            Action::AskClarification => ActionKind::AskClarification,
            Action::HandoffHuman => ActionKind::HandoffHuman,
        }
    }
}

/// Action names as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ProposeTour,
    #[default]
    AskClarification,
    HandoffHuman,
}

/// A single chat turn as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    /// ISO-8601, display only. Ordering comes from list position.
    pub created_at: String,
    /// Only ever set on assistant messages
    pub action: Option<Action>,
}

impl Message {
    /// Optimistic user message for text that has not been confirmed yet
    pub fn optimistic(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::temporary(),
            role: Role::User,
            content: text.into(),
            created_at: at.to_rfc3339(),
            action: None,
        }
    }

    /// The "assistant is typing" placeholder
    pub fn typing(at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::Typing,
            role: Role::Assistant,
            content: TYPING_PLACEHOLDER.to_string(),
            created_at: at.to_rfc3339(),
            action: None,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.id == MessageId::Typing
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Tour time, present only for tour proposals
    pub fn propose_time(&self) -> Option<DateTime<Utc>> {
        match self.action {
            Some(Action::ProposeTour { at }) => Some(at),
            _ => None,
        }
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 and the naive `2024-05-01T14:00:00.123456` form the
/// service emits. Naive values are wall-clock times in the viewer's local
/// zone; in a DST gap nothing matches and the parse fails, in a fold the
/// earlier instant wins.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}
