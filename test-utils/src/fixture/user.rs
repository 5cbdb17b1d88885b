//! User fixtures conforming to `UserResponse`.

use serde_json::{json, Value};

/// Default test user ID.
pub const DEFAULT_ID: &str = "80351110224678912";

/// Default test username.
pub const DEFAULT_USERNAME: &str = "nelly";

/// Creates a `UserResponse` payload with default values.
///
/// # Default Values
/// - id: `"80351110224678912"`
/// - username: `"nelly"`
/// - avatar: `null`
/// - discriminator: `"0"`
/// - public_flags, flags: `0`
/// - global_name: `null`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let user = fixture::user::entity();
/// assert_eq!(user["username"], "nelly");
/// ```
pub fn entity() -> Value {
    entity_builder().build()
}

/// Creates a user payload builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized `UserResponse` payloads.
pub struct UserEntityBuilder {
    id: String,
    username: String,
    global_name: Option<String>,
    bot: Option<bool>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            global_name: None,
            bot: None,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn global_name(mut self, global_name: Option<&str>) -> Self {
        self.global_name = global_name.map(str::to_string);
        self
    }

    /// Marks the user as a bot account; `bot` is omitted otherwise.
    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = Some(bot);
        self
    }

    pub fn build(self) -> Value {
        let mut user = json!({
            "id": self.id,
            "username": self.username,
            "avatar": null,
            "discriminator": "0",
            "public_flags": 0,
            "flags": 0,
            "global_name": self.global_name,
        });

        if let Some(bot) = self.bot {
            user["bot"] = json!(bot);
        }

        user
    }
}
