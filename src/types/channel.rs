//! Channel-related types for the Slack API.

use super::{ChannelId, UserId};
use serde::{Deserialize, Serialize};

/// Slack channel/conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID
    pub id: ChannelId,
    /// Channel name (without #)
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is a channel
    #[serde(default)]
    pub is_channel: bool,
    /// Whether this is an IM (direct message)
    #[serde(default)]
    pub is_im: bool,
    /// Whether this is an MPIM (multi-party IM)
    #[serde(default)]
    pub is_mpim: bool,
    /// Whether this is a private channel
    #[serde(default)]
    pub is_private: bool,
    /// Whether this is archived
    #[serde(default)]
    pub is_archived: bool,
    /// Whether the bot is a member
    #[serde(default)]
    pub is_member: bool,
    /// Creator user ID
    #[serde(default)]
    pub creator: Option<UserId>,
    /// Creation timestamp (Unix)
    #[serde(default)]
    pub created: Option<i64>,
    /// Channel topic
    #[serde(default)]
    pub topic: Option<ChannelTopic>,
    /// Channel purpose
    #[serde(default)]
    pub purpose: Option<ChannelPurpose>,
    /// Number of members
    #[serde(default)]
    pub num_members: Option<i32>,
    /// Other party of an IM
    #[serde(default)]
    pub user: Option<UserId>,
}

impl Channel {
    /// Display name, falling back to the ID for unnamed conversations
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Channel topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelTopic {
    /// Topic text
    pub value: String,
    /// Who set it
    #[serde(default)]
    pub creator: Option<UserId>,
    /// When it was set
    #[serde(default)]
    pub last_set: i64,
}

/// Channel purpose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPurpose {
    /// Purpose text
    pub value: String,
    /// Who set it
    #[serde(default)]
    pub creator: Option<UserId>,
    /// When it was set
    #[serde(default)]
    pub last_set: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_minimal() {
        let channel: Channel = serde_json::from_value(json!({"id": "D024BE91L", "is_im": true, "user": "U1"})).unwrap();
        assert!(channel.is_im);
        assert_eq!(channel.display_name(), "D024BE91L");
        assert_eq!(channel.user, Some(UserId::new("U1")));
    }
}
