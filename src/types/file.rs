//! File-related types for the Slack API.

use super::{FileId, UserId};
use serde::{Deserialize, Serialize};

/// Slack file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// File ID
    pub id: FileId,
    /// File name
    #[serde(default)]
    pub name: Option<String>,
    /// File title
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mimetype: Option<String>,
    /// User who uploaded
    #[serde(default)]
    pub user: Option<UserId>,
    /// File size in bytes
    #[serde(default)]
    pub size: Option<i64>,
    /// URL to private file
    #[serde(default)]
    pub url_private: Option<String>,
    /// Permalink
    #[serde(default)]
    pub permalink: Option<String>,
    /// Public permalink, present once the file is shared publicly
    #[serde(default)]
    pub permalink_public: Option<String>,
    /// Whether the file has a public URL
    #[serde(default)]
    pub public_url_shared: bool,
}
