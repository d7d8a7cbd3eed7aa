//! Response types for users service.

use crate::types::User;
use serde::Deserialize;

/// Response from users.info
#[derive(Debug, Clone, Deserialize)]
pub struct GetUserResponse {
    /// Success indicator
    pub ok: bool,
    /// User
    pub user: User,
}
