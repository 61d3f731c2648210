use serde::{Deserialize, Serialize};

use crate::message::ActionKind;

/// Events emitted by the chat controller.
/// UI drains these each frame for status updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// History fetch settled with this many messages
    HistoryLoaded { count: usize },

    /// History fetch failed; the conversation starts empty
    HistoryFailed { message: String },

    /// A reply was committed to the conversation
    ReplyReceived { id: String, action: Option<ActionKind> },

    /// A send failed and was rolled back
    SendFailed { message: String },
}
