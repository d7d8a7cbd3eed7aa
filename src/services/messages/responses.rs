//! Response types for messages service.

use crate::types::{ChannelId, Timestamp};
use serde::Deserialize;
use serde_json::Value;

/// Response from chat.postMessage
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Success indicator
    pub ok: bool,
    /// Channel the message landed in
    pub channel: ChannelId,
    /// Message timestamp
    pub ts: Timestamp,
    /// The posted message as Slack echoes it
    #[serde(default)]
    pub message: Option<Value>,
}

/// Response from chat.getPermalink
#[derive(Debug, Clone, Deserialize)]
pub struct GetPermalinkResponse {
    /// Success indicator
    pub ok: bool,
    /// Channel ID
    #[serde(default)]
    pub channel: Option<ChannelId>,
    /// Permalink URL
    pub permalink: String,
}
