//! Request types for messages service.

use crate::types::{Attachment, ChannelId, Timestamp};
use serde::Serialize;

/// Request to post a message
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    /// Channel, private group, or IM channel ID
    pub channel: ChannelId,
    /// Message text
    pub text: String,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Parse markdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
    /// Post as the authed user; always false for this client
    pub as_user: bool,
    /// Thread timestamp for replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
}

impl PostMessageRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            attachments: None,
            mrkdwn: None,
            as_user: false,
            thread_ts: None,
        }
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Enable or disable markdown parsing
    pub fn mrkdwn(mut self, mrkdwn: bool) -> Self {
        self.mrkdwn = Some(mrkdwn);
        self
    }

    /// Reply in a thread
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }
}

/// Request to get a message permalink
#[derive(Debug, Clone, Serialize)]
pub struct GetPermalinkRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Message timestamp
    pub message_ts: Timestamp,
}

impl GetPermalinkRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, message_ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            message_ts: message_ts.into(),
        }
    }
}
