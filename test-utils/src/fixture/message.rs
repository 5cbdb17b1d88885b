//! Message fixtures conforming to `MessageResponse` and `MessageCreateRequest`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use super::user;

/// Default test message ID.
pub const DEFAULT_ID: &str = "334385199974967042";

/// Default test channel ID.
pub const DEFAULT_CHANNEL_ID: &str = "41771983423143937";

/// Default message content.
pub const DEFAULT_CONTENT: &str = "Hello, World!";

/// Creates a `MessageResponse` payload carrying exactly the required fields.
///
/// # Default Values
/// - id: `"334385199974967042"`
/// - channel_id: `"41771983423143937"`
/// - type: `0`
/// - content: `"Hello, World!"`
/// - author: [`user::entity`]
/// - timestamp: `2017-07-11T17:27:07.299Z`
/// - empty mention, attachment, embed and component lists
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let message = fixture::message::entity();
/// assert_eq!(message["content"], "Hello, World!");
/// ```
pub fn entity() -> Value {
    entity_builder().build()
}

/// Creates a message payload builder for customization.
pub fn entity_builder() -> MessageEntityBuilder {
    MessageEntityBuilder::default()
}

/// A `MessageCreateRequest` body holding only content.
pub fn create_request() -> Value {
    json!({ "content": DEFAULT_CONTENT })
}

/// 2017-07-11T17:27:07.299Z
fn default_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_499_794_027_299).unwrap_or_default()
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builder for customized `MessageResponse` payloads.
pub struct MessageEntityBuilder {
    id: String,
    channel_id: String,
    content: String,
    author: Value,
    timestamp: DateTime<Utc>,
    edited_timestamp: Option<DateTime<Utc>>,
    pinned: bool,
}

impl Default for MessageEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            content: DEFAULT_CONTENT.to_string(),
            author: user::entity(),
            timestamp: default_timestamp(),
            edited_timestamp: None,
            pinned: false,
        }
    }
}

impl MessageEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the author payload, normally built with [`user::entity_builder`].
    pub fn author(mut self, author: Value) -> Self {
        self.author = author;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the edit time; `edited_timestamp` is omitted when never set.
    pub fn edited_timestamp(mut self, edited_timestamp: DateTime<Utc>) -> Self {
        self.edited_timestamp = Some(edited_timestamp);
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn build(self) -> Value {
        let mut message = json!({
            "id": self.id,
            "channel_id": self.channel_id,
            "type": 0,
            "content": self.content,
            "author": self.author,
            "mentions": [],
            "mention_roles": [],
            "mention_everyone": false,
            "attachments": [],
            "embeds": [],
            "components": [],
            "timestamp": format_timestamp(self.timestamp),
            "flags": 0,
            "pinned": self.pinned,
            "tts": false,
        });

        if let Some(edited) = self.edited_timestamp {
            message["edited_timestamp"] = json!(format_timestamp(edited));
        }

        message
    }
}
