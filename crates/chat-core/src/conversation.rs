//! Conversation state machine — optimistic send with rollback.
//!
//! Every mutation goes through [`Conversation::apply`]:
//! 1. `Submit` appends an optimistic user message plus the typing sentinel
//!    and asks the caller to send
//! 2. `ReplySucceeded` swaps both for the confirmed exchange
//! 3. `ReplyFailed` removes both, restoring the pre-submit list exactly
//!
//! The state is `Idle` or `Sending`, so at most one optimistic message and
//! one sentinel can exist at a time.

use chrono::{DateTime, Utc};
use chat_types::{
    ChatError, ValidationError,
    message::{Message, MessageId, Role},
    wire::ReplyPayload,
};

/// Input to the state machine
#[derive(Debug, Clone)]
pub enum ConversationEvent {
    /// The user pressed send
    Submit { text: String, at: DateTime<Utc> },
    ReplySucceeded(ReplyPayload),
    ReplyFailed(ChatError),
    HistoryLoaded(Vec<Message>),
    HistoryFailed(ChatError),
}

/// What the caller must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed
    None,
    /// The submit was a no-op
    Rejected(ValidationError),
    /// Optimistic entries are in place; issue the request
    SendReply(PendingSend),
    /// The reply was committed under this id
    Committed { reply_id: MessageId },
    /// The send failed and the conversation was restored; report the error
    RolledBack(ChatError),
    /// History replaced the conversation
    HistoryReplaced { count: usize },
    /// History failed; the conversation starts empty
    HistoryEmpty(ChatError),
}

/// The one unconfirmed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub temp_id: MessageId,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending(PendingSend),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Loading,
    Ready,
}

/// Ordered message list plus the single in-flight send
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    send: SendState,
    history: HistoryState,
}

impl Conversation {
    /// A fresh conversation waiting for its history
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            send: SendState::Idle,
            history: HistoryState::Loading,
        }
    }

    /// A conversation that starts from `messages` with history already settled
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            send: SendState::Idle,
            history: HistoryState::Ready,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.send, SendState::Sending(_))
    }

    pub fn is_loading_history(&self) -> bool {
        self.history == HistoryState::Loading
    }

    /// Whether the input surface should accept a submission
    pub fn can_submit(&self) -> bool {
        !self.is_sending() && !self.is_loading_history()
    }

    pub fn pending(&self) -> Option<&PendingSend> {
        match &self.send {
            SendState::Sending(p) => Some(p),
            SendState::Idle => None,
        }
    }

    pub fn has_typing_indicator(&self) -> bool {
        self.messages.iter().any(Message::is_typing)
    }

    /// Apply one event. The only place the message list or flags change.
    pub fn apply(&mut self, event: ConversationEvent) -> Effect {
        match event {
            ConversationEvent::Submit { text, at } => self.submit(&text, at),
            ConversationEvent::ReplySucceeded(payload) => self.commit(payload),
            ConversationEvent::ReplyFailed(err) => self.rollback(err),
            ConversationEvent::HistoryLoaded(messages) => {
                if !self.is_loading_history() {
                    log::debug!("Ignoring history that arrived after the conversation settled");
                    return Effect::None;
                }
                let count = messages.len();
                self.messages = messages;
                self.history = HistoryState::Ready;
                Effect::HistoryReplaced { count }
            }
            ConversationEvent::HistoryFailed(err) => {
                if !self.is_loading_history() {
                    return Effect::None;
                }
                self.messages.clear();
                self.history = HistoryState::Ready;
                Effect::HistoryEmpty(err)
            }
        }
    }

    fn submit(&mut self, text: &str, at: DateTime<Utc>) -> Effect {
        let text = text.trim();
        if text.is_empty() {
            return Effect::Rejected(ValidationError::EmptyMessage);
        }
        if self.is_loading_history() {
            return Effect::Rejected(ValidationError::HistoryLoading);
        }
        if self.is_sending() {
            return Effect::Rejected(ValidationError::SendInFlight);
        }

        let user = Message::optimistic(text, at);
        let pending = PendingSend {
            temp_id: user.id.clone(),
            text: user.content.clone(),
            created_at: user.created_at.clone(),
        };
        self.messages.push(user);
        self.messages.push(Message::typing(at));
        self.send = SendState::Sending(pending.clone());
        Effect::SendReply(pending)
    }

    fn commit(&mut self, payload: ReplyPayload) -> Effect {
        let pending = match std::mem::replace(&mut self.send, SendState::Idle) {
            SendState::Sending(p) => p,
            SendState::Idle => {
                log::debug!("Ignoring reply {} with no send in flight", payload.id);
                return Effect::None;
            }
        };
        self.remove_optimistic(&pending.temp_id);

        let user_id = payload
            .user_message_id
            .clone()
            .map(MessageId::Server)
            .unwrap_or(pending.temp_id);
        self.messages.push(Message {
            id: user_id,
            role: Role::User,
            content: pending.text,
            created_at: pending.created_at,
            action: None,
        });

        let reply = payload.to_message();
        let reply_id = reply.id.clone();
        self.messages.push(reply);
        Effect::Committed { reply_id }
    }

    fn rollback(&mut self, err: ChatError) -> Effect {
        match std::mem::replace(&mut self.send, SendState::Idle) {
            SendState::Sending(pending) => {
                self.remove_optimistic(&pending.temp_id);
                Effect::RolledBack(err)
            }
            SendState::Idle => Effect::None,
        }
    }

    // Both entries go in one pass so neither can outlive the other.
    fn remove_optimistic(&mut self, temp_id: &MessageId) {
        self.messages
            .retain(|m| &m.id != temp_id && m.id != MessageId::Typing);
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
