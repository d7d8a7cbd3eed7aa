//! Test fixtures for Slack API responses.
//!
//! Provides realistic response bodies for unit and integration tests.

use serde_json::{json, Value};

/// A public channel as returned by `conversations.list`
pub fn channel_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_channel": true,
        "is_im": false,
        "is_mpim": false,
        "is_private": false,
        "is_archived": false,
        "is_member": true,
        "creator": "U1234567890",
        "created": 1449252889,
        "topic": {"value": "Company-wide announcements", "creator": "U1234567890", "last_set": 1449252889},
        "purpose": {"value": "This channel is for team-wide communication", "creator": "U1234567890", "last_set": 1449252889},
        "num_members": 42
    })
}

/// A DM channel as returned by `conversations.open`
pub fn dm_channel_json(id: &str, user: &str) -> Value {
    json!({
        "id": id,
        "is_im": true,
        "user": user,
        "created": 1460147748,
        "is_archived": false
    })
}

/// A workspace member as returned by `users.list` and `users.info`
pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "team_id": "T1234567890",
        "name": name,
        "real_name": format!("{} Example", name),
        "deleted": false,
        "tz": "America/Los_Angeles",
        "is_admin": false,
        "is_bot": false,
        "is_app_user": false,
        "profile": {
            "real_name": format!("{} Example", name),
            "display_name": name,
            "email": format!("{}@example.com", name),
            "image_72": "https://a.slack-edge.com/avatar_72.png"
        }
    })
}

/// A bot as returned by `bots.info`
pub fn bot_json(id: &str) -> Value {
    json!({
        "id": id,
        "deleted": false,
        "name": "worker-bot",
        "updated": 1449272004,
        "app_id": "A161CLERW",
        "user_id": "U012ABCDEF",
        "icons": {
            "image_36": "https://a.slack-edge.com/bot_36.png",
            "image_48": "https://a.slack-edge.com/bot_48.png",
            "image_72": "https://a.slack-edge.com/bot_72.png"
        }
    })
}

/// A publicly shared file as returned by `files.sharedPublicURL`
pub fn file_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "report.pdf",
        "title": "Weekly report",
        "mimetype": "application/pdf",
        "user": "U1234567890",
        "size": 12345,
        "url_private": format!("https://files.slack.com/files-pri/T1234567890-{}/report.pdf", id),
        "permalink": format!("https://example.slack.com/files/U1234567890/{}/report.pdf", id),
        "permalink_public": format!("https://slack-files.com/T1234567890-{}-abcdef", id),
        "public_url_shared": true
    })
}

/// One page of a paginated listing; an empty cursor marks the last page
pub fn page(listing: &str, items: Vec<Value>, next_cursor: Option<&str>) -> Value {
    let mut body = json!({ "ok": true });
    body[listing] = Value::Array(items);
    if let Some(cursor) = next_cursor {
        body["response_metadata"] = json!({ "next_cursor": cursor });
    } else {
        body["response_metadata"] = json!({ "next_cursor": "" });
    }
    body
}

/// A successful `chat.postMessage` response
pub fn post_message_response(channel: &str, ts: &str, text: &str) -> Value {
    json!({
        "ok": true,
        "channel": channel,
        "ts": ts,
        "message": {
            "type": "message",
            "subtype": "bot_message",
            "text": text,
            "ts": ts,
            "bot_id": "B1234567890"
        }
    })
}

/// A successful `chat.getPermalink` response
pub fn permalink_response(channel: &str, ts: &str) -> Value {
    json!({
        "ok": true,
        "channel": channel,
        "permalink": format!(
            "https://example.slack.com/archives/{}/p{}",
            channel,
            ts.replace('.', "")
        )
    })
}

/// An `ok: false` body carrying `code`
pub fn error_response(code: &str) -> Value {
    json!({ "ok": false, "error": code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bot, Channel, File, User};

    #[test]
    fn test_fixtures_decode_into_types() {
        let channel: Channel = serde_json::from_value(channel_json("C1", "general")).unwrap();
        assert_eq!(channel.display_name(), "general");

        let user: User = serde_json::from_value(user_json("U1", "ada")).unwrap();
        assert_eq!(user.email(), Some("ada@example.com"));

        let bot: Bot = serde_json::from_value(bot_json("B1")).unwrap();
        assert_eq!(bot.name.as_deref(), Some("worker-bot"));

        let file: File = serde_json::from_value(file_json("F1")).unwrap();
        assert!(file.public_url_shared);
    }

    #[test]
    fn test_page_marks_last_page_with_empty_cursor() {
        let last = page("members", vec![], None);
        assert_eq!(last["response_metadata"]["next_cursor"], "");
        assert_eq!(last["members"], json!([]));

        let more = page("channels", vec![json!({"id": "C1"})], Some("abc"));
        assert_eq!(more["response_metadata"]["next_cursor"], "abc");
    }

    #[test]
    fn test_permalink_response_strips_dot() {
        let body = permalink_response("C1", "1358546515.000008");
        assert_eq!(
            body["permalink"],
            "https://example.slack.com/archives/C1/p1358546515000008"
        );
    }
}
