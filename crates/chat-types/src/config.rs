use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_COMMUNITY_ID: &str = "sunset-ridge";
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Reply service base URL, without a trailing slash
    pub api_base_url: String,
    /// Sent with every reply request
    pub community_id: Option<String>,
    /// How many recent messages to fetch on start-up
    pub history_limit: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::from_env_value(option_env!("CHAT_API_URL"))
    }
}

impl ChatConfig {
    /// Build the defaults, overriding the base URL when `api_url` is set
    /// and non-blank.
    pub fn from_env_value(api_url: Option<&str>) -> Self {
        let base = api_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            api_base_url: String::new(),
            community_id: Some(DEFAULT_COMMUNITY_ID.to_string()),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
        .with_base_url(base)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(ChatError::Config("api_base_url is empty".to_string()));
        }
        if self.history_limit == 0 {
            return Err(ChatError::Config("history_limit must be positive".to_string()));
        }
        Ok(())
    }
}
