//! Response types for conversations service.

use crate::types::Channel;
use serde::Deserialize;

/// Response from conversations.open
#[derive(Debug, Clone, Deserialize)]
pub struct OpenConversationResponse {
    /// Success indicator
    pub ok: bool,
    /// Opened channel
    pub channel: Channel,
    /// Whether nothing changed
    #[serde(default)]
    pub no_op: bool,
    /// Whether the conversation was already open
    #[serde(default)]
    pub already_open: bool,
}
