//! Message-related types for the Slack API.

use serde::{Deserialize, Serialize};

/// Message attachment (legacy)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Fallback text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Color bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pretext
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    /// Main text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    /// Fields rendered as mrkdwn
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
}

impl Attachment {
    /// Create an attachment with fallback and body text
    pub fn new(fallback: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            fallback: Some(fallback.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Set the color bar
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a field
    pub fn field(mut self, field: AttachmentField) -> Self {
        self.fields.push(field);
        self
    }
}

/// Attachment field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Field title
    pub title: String,
    /// Field value
    pub value: String,
    /// Whether short (side-by-side)
    #[serde(default)]
    pub short: bool,
}

impl AttachmentField {
    /// Create a new field
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attachment_skips_unset_fields() {
        let attachment = Attachment::new("Run failed", "Job *nightly-etl* failed")
            .color("danger")
            .field(AttachmentField::new("State", "Failed", true));

        assert_eq!(
            serde_json::to_value(&attachment).unwrap(),
            json!({
                "fallback": "Run failed",
                "text": "Job *nightly-etl* failed",
                "color": "danger",
                "fields": [{"title": "State", "value": "Failed", "short": true}]
            })
        );
    }
}
