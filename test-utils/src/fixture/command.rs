//! Application command fixtures conforming to `ApplicationCommandCreateRequest` and
//! `ApplicationCommandResponse`.

use serde_json::{json, Value};

/// Default command name.
pub const DEFAULT_NAME: &str = "ping";

/// Default command description.
pub const DEFAULT_DESCRIPTION: &str = "Replies with pong";

/// Default application ID owning the command.
pub const DEFAULT_APPLICATION_ID: &str = "461618159171141643";

/// Creates an `ApplicationCommandCreateRequest` payload for a chat input command.
///
/// # Default Values
/// - name: `"ping"`
/// - description: `"Replies with pong"`
/// - no type (chat input), no options
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let command = fixture::command::entity_builder()
///     .name("echo")
///     .option(fixture::command::string_option("text", true))
///     .build();
/// ```
pub fn entity() -> Value {
    entity_builder().build()
}

pub fn entity_builder() -> CommandEntityBuilder {
    CommandEntityBuilder::default()
}

/// A string option with the given name.
pub fn string_option(name: &str, required: bool) -> Value {
    json!({
        "type": 3,
        "name": name,
        "description": format!("The {}", name),
        "required": required,
    })
}

/// The `ApplicationCommandResponse` Discord returns for [`entity`].
pub fn response() -> Value {
    json!({
        "id": "1072238489134571562",
        "application_id": DEFAULT_APPLICATION_ID,
        "version": "1072238489134571563",
        "type": 1,
        "name": DEFAULT_NAME,
        "description": DEFAULT_DESCRIPTION,
        "default_member_permissions": null,
    })
}

/// Builder for customized `ApplicationCommandCreateRequest` payloads.
pub struct CommandEntityBuilder {
    name: String,
    description: Option<String>,
    kind: Option<u8>,
    options: Vec<Value>,
}

impl Default for CommandEntityBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
            kind: None,
            options: Vec::new(),
        }
    }
}

impl CommandEntityBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description; `None` omits the key.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Sets the raw `type` literal, e.g. `2` for a user context menu command.
    pub fn kind(mut self, kind: u8) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn option(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Value {
        let mut command = json!({ "name": self.name });

        if let Some(description) = self.description {
            command["description"] = json!(description);
        }
        if let Some(kind) = self.kind {
            command["type"] = json!(kind);
        }
        if !self.options.is_empty() {
            command["options"] = Value::Array(self.options);
        }

        command
    }
}
