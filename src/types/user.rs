//! User-related types for the Slack API.

use super::{TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Slack user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// Username
    #[serde(default)]
    pub name: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Whether deleted/deactivated
    #[serde(default)]
    pub deleted: bool,
    /// Timezone
    #[serde(default)]
    pub tz: Option<String>,
    /// User profile
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Whether admin
    #[serde(default)]
    pub is_admin: bool,
    /// Whether bot
    #[serde(default)]
    pub is_bot: bool,
    /// Whether app user
    #[serde(default)]
    pub is_app_user: bool,
}

impl User {
    /// Best available name: profile display name, real name, then handle
    pub fn best_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.display_name.as_deref())
            .filter(|n| !n.is_empty())
            .or(self.real_name.as_deref())
            .or(self.name.as_deref())
            .unwrap_or(self.id.as_str())
    }

    /// Email address from the profile
    pub fn email(&self) -> Option<&str> {
        self.profile.as_ref()?.email.as_deref()
    }
}

/// User profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Status text
    #[serde(default)]
    pub status_text: Option<String>,
    /// Image 72x72
    #[serde(default)]
    pub image_72: Option<String>,
    /// Bot ID when the user is a bot user
    #[serde(default)]
    pub bot_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_best_name_prefers_display_name() {
        let user: User = serde_json::from_value(json!({
            "id": "U1",
            "name": "ada",
            "real_name": "Ada Lovelace",
            "profile": {"display_name": "Countess", "email": "ada@example.com"}
        }))
        .unwrap();

        assert_eq!(user.best_name(), "Countess");
        assert_eq!(user.email(), Some("ada@example.com"));
    }

    #[test]
    fn test_best_name_skips_empty_display_name() {
        let user: User = serde_json::from_value(json!({
            "id": "U2",
            "name": "grace",
            "profile": {"display_name": ""}
        }))
        .unwrap();

        assert_eq!(user.best_name(), "grace");
    }
}
