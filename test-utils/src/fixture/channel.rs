//! Channel fixtures conforming to `GuildChannelResponse`.

use serde_json::{json, Value};

/// Default test channel ID.
pub const DEFAULT_ID: &str = "41771983423143937";

/// Default guild ID owning the channel.
pub const DEFAULT_GUILD_ID: &str = "197038439483310086";

/// Default channel name.
pub const DEFAULT_NAME: &str = "general";

/// Creates a `GuildChannelResponse` payload for a text channel.
pub fn entity() -> Value {
    entity_builder().build()
}

pub fn entity_builder() -> ChannelEntityBuilder {
    ChannelEntityBuilder::default()
}

/// Builder for customized `GuildChannelResponse` payloads.
pub struct ChannelEntityBuilder {
    id: String,
    guild_id: String,
    name: String,
    kind: u8,
    position: i32,
    topic: Option<String>,
}

impl Default for ChannelEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            guild_id: DEFAULT_GUILD_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            kind: 0,
            position: 0,
            topic: None,
        }
    }
}

impl ChannelEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the raw channel `type` literal.
    pub fn kind(mut self, kind: u8) -> Self {
        self.kind = kind;
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn build(self) -> Value {
        let mut channel = json!({
            "id": self.id,
            "type": self.kind,
            "guild_id": self.guild_id,
            "name": self.name,
            "position": self.position,
            "flags": 0,
        });

        if let Some(topic) = self.topic {
            channel["topic"] = json!(topic);
        }

        channel
    }
}
