//! Port traits — the hexagonal architecture boundary.
//!
//! Implementations live in `chat-platform` (browser adapters).
//! The core only depends on these traits.

use async_trait::async_trait;
use chat_types::{Result, message::Message, wire::ReplyPayload};

// ─── Reply Port ──────────────────────────────────────────────

/// The remote reply/history service.
///
/// Both calls are single-shot: no retry, backoff, batching or caching,
/// and nothing is retained between calls.
#[async_trait(?Send)]
pub trait ReplyPort {
    /// Post one user message and return the assistant's reply
    async fn send_message(&self, text: &str) -> Result<ReplyPayload>;

    /// Fetch up to `limit` most recent messages, oldest first as the service orders them
    async fn fetch_history(&self, limit: u32) -> Result<Vec<Message>>;

    /// Base URL of the service (for logging/debug)
    fn endpoint(&self) -> &str;
}
