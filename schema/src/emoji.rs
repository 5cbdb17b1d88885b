use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::snowflake::Snowflake;
use crate::user::UserResponse;
use crate::validate::{Validate, Validator};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EmojiResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub roles: Vec<Snowflake>,
    pub require_colons: bool,
    pub managed: bool,
    pub animated: bool,
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateGuildEmojiRequest {
    #[schema(min_length = 2, max_length = 32)]
    pub name: String,
    /// Data URI of a 128x128 image.
    pub image: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 1521)]
    pub roles: Option<Option<Vec<Snowflake>>>,
}

impl Validate for CreateGuildEmojiRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 2, 32);
        v.items_opt(
            "roles",
            self.roles.as_ref().and_then(|r| r.as_deref()),
            0,
            1521,
        );
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateGuildEmojiRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 2, max_length = 32)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 1521)]
    pub roles: Option<Option<Vec<Snowflake>>>,
}

impl Validate for UpdateGuildEmojiRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 2, 32);
        v.items_opt(
            "roles",
            self.roles.as_ref().and_then(|r| r.as_deref()),
            0,
            1521,
        );
    }
}
