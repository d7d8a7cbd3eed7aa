//! Common types for the Slack API.
//!
//! Defines shared data structures used across services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod bot;
pub mod channel;
pub mod file;
pub mod message;
pub mod user;

pub use bot::*;
pub use channel::*;
pub use file::*;
pub use message::*;
pub use user::*;

/// Declares a transparent string identifier
macro_rules! slack_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

slack_id!(
    /// Slack timestamp (ts) - unique identifier for messages
    Timestamp
);
slack_id!(
    /// Slack channel ID
    ChannelId
);
slack_id!(
    /// Slack user ID
    UserId
);
slack_id!(
    /// Slack bot ID
    BotId
);
slack_id!(
    /// Slack team/workspace ID
    TeamId
);
slack_id!(
    /// Slack file ID
    FileId
);

impl Timestamp {
    /// Parse timestamp to DateTime
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.0.split('.').next()?.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl ChannelId {
    /// Check if this is a public channel ID (starts with C)
    pub fn is_public_channel(&self) -> bool {
        self.0.starts_with('C')
    }

    /// Check if this is a DM channel ID (starts with D)
    pub fn is_dm(&self) -> bool {
        self.0.starts_with('D')
    }
}

/// Response metadata for pagination
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Next cursor for pagination
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResponseMetadata {
    /// Check if there are more results
    pub fn has_more(&self) -> bool {
        self.next_cursor
            .as_ref()
            .map(|c| !c.is_empty())
            .unwrap_or(false)
    }
}
