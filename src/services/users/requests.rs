//! Request types for users service.

use crate::types::UserId;
use serde::Serialize;

/// Request to get user info
#[derive(Debug, Clone, Serialize)]
pub struct GetUserRequest {
    /// User ID
    pub user: UserId,
    /// Include locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_locale: Option<bool>,
}

impl GetUserRequest {
    /// Create a new request
    pub fn new(user: impl Into<UserId>) -> Self {
        Self {
            user: user.into(),
            include_locale: None,
        }
    }

    /// Include the user's locale
    pub fn include_locale(mut self, include: bool) -> Self {
        self.include_locale = Some(include);
        self
    }
}

/// Request to list users; the cursor is managed by the paginator
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersRequest {
    /// Page size requested from Slack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Include locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_locale: Option<bool>,
    /// Team ID for Enterprise Grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl ListUsersRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
