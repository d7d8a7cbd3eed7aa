//! Request types for conversations service.

use crate::types::UserId;
use serde::Serialize;

/// Request to list conversations; the cursor is managed by the paginator
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListConversationsRequest {
    /// Comma-separated conversation types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Exclude archived channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_archived: Option<bool>,
    /// Page size requested from Slack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Team ID for Enterprise Grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl ListConversationsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given conversation types
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Exclude archived channels
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = Some(exclude);
        self
    }

    /// Set page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request to open or resume a DM/MPIM
#[derive(Debug, Clone, Serialize)]
pub struct OpenConversationRequest {
    /// Comma-separated user IDs
    pub users: String,
    /// Return the full IM channel definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_im: Option<bool>,
}

impl OpenConversationRequest {
    /// Open a DM with one user
    pub fn new(user: impl Into<UserId>) -> Self {
        Self {
            users: user.into().0,
            return_im: None,
        }
    }

    /// Open an MPIM with several users
    pub fn with_users(users: &[UserId]) -> Self {
        Self {
            users: users
                .iter()
                .map(UserId::as_str)
                .collect::<Vec<_>>()
                .join(","),
            return_im: None,
        }
    }

    /// Ask for the full IM definition
    pub fn return_im(mut self, return_im: bool) -> Self {
        self.return_im = Some(return_im);
        self
    }
}
