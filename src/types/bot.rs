//! Bot-related types for the Slack API.

use super::{BotId, UserId};
use serde::{Deserialize, Serialize};

/// Bot integration as returned by bots.info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    /// Bot ID
    pub id: BotId,
    /// Bot name
    #[serde(default)]
    pub name: Option<String>,
    /// Whether deleted
    #[serde(default)]
    pub deleted: bool,
    /// App ID
    #[serde(default)]
    pub app_id: Option<String>,
    /// Bot user ID
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Last update (Unix)
    #[serde(default)]
    pub updated: Option<i64>,
    /// Bot icons
    #[serde(default)]
    pub icons: Option<BotIcons>,
}

/// Bot icons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotIcons {
    /// 36x36 icon
    #[serde(default)]
    pub image_36: Option<String>,
    /// 48x48 icon
    #[serde(default)]
    pub image_48: Option<String>,
    /// 72x72 icon
    #[serde(default)]
    pub image_72: Option<String>,
}
