//! Chat controller — drives the conversation state machine through the reply port.
//!
//! The futures here must be spawned via `wasm_bindgen_futures::spawn_local`.
//! No `RefCell` borrow is held across an `.await`, so the UI can read the
//! conversation while a request is outstanding.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    ChatError, ValidationError,
    event::ChatEvent,
    message::MessageId,
};
use crate::conversation::{Conversation, ConversationEvent, Effect};
use crate::event_bus::EventBus;
use crate::ports::ReplyPort;

/// How a submit settled
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent
    Ignored(ValidationError),
    Committed(MessageId),
    RolledBack(ChatError),
    /// The reply settled after the send was no longer pending
    Stale,
}

#[derive(Clone)]
pub struct ChatController {
    conversation: Rc<RefCell<Conversation>>,
    port: Rc<dyn ReplyPort>,
    event_bus: EventBus,
    history_limit: u32,
}

impl ChatController {
    pub fn new(port: Rc<dyn ReplyPort>, event_bus: EventBus, history_limit: u32) -> Self {
        Self {
            conversation: Rc::new(RefCell::new(Conversation::new())),
            port,
            event_bus,
            history_limit,
        }
    }

    /// Shared handle for read-only rendering
    pub fn conversation(&self) -> Rc<RefCell<Conversation>> {
        self.conversation.clone()
    }

    /// Fetch the start-up history. Failures leave the conversation empty.
    pub async fn load_history(&self) -> usize {
        log::info!(
            "Loading up to {} messages from {}",
            self.history_limit,
            self.port.endpoint()
        );
        let event = match self.port.fetch_history(self.history_limit).await {
            Ok(messages) => ConversationEvent::HistoryLoaded(messages),
            Err(e) => ConversationEvent::HistoryFailed(e),
        };

        match self.dispatch(event) {
            Effect::HistoryReplaced { count } => {
                log::info!("Loaded {} messages from backend", count);
                self.event_bus.emit(ChatEvent::HistoryLoaded { count });
                count
            }
            Effect::HistoryEmpty(e) => {
                log::warn!("Failed to load chat history: {}", e);
                self.event_bus.emit(ChatEvent::HistoryFailed {
                    message: e.to_string(),
                });
                0
            }
            _ => 0,
        }
    }

    /// Submit user text: optimistic insert, one request, then commit or roll back.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let pending = match self.dispatch(ConversationEvent::Submit {
            text: text.to_string(),
            at: chrono::Utc::now(),
        }) {
            Effect::SendReply(pending) => pending,
            Effect::Rejected(reason) => {
                log::debug!("Submit ignored: {}", reason);
                return SubmitOutcome::Ignored(reason);
            }
            other => {
                log::debug!("Unexpected effect from submit: {:?}", other);
                return SubmitOutcome::Stale;
            }
        };

        let event = match self.port.send_message(&pending.text).await {
            Ok(payload) => ConversationEvent::ReplySucceeded(payload),
            Err(e) => ConversationEvent::ReplyFailed(e),
        };

        match self.dispatch(event) {
            Effect::Committed { reply_id } => {
                let action = self
                    .conversation
                    .borrow()
                    .messages()
                    .last()
                    .and_then(|m| m.action.as_ref().map(|a| a.kind()));
                self.event_bus.emit(ChatEvent::ReplyReceived {
                    id: reply_id.to_string(),
                    action,
                });
                SubmitOutcome::Committed(reply_id)
            }
            Effect::RolledBack(e) => {
                log::error!("Failed to get response: {}", e);
                self.event_bus.emit(ChatEvent::SendFailed {
                    message: e.to_string(),
                });
                SubmitOutcome::RolledBack(e)
            }
            other => {
                log::debug!("Unexpected effect from reply: {:?}", other);
                SubmitOutcome::Stale
            }
        }
    }

    fn dispatch(&self, event: ConversationEvent) -> Effect {
        self.conversation.borrow_mut().apply(event)
    }
}
