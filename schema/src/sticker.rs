use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::snowflake::Snowflake;
use crate::user::UserResponse;
use crate::validate::{Validate, Validator};

int_enum! {
    pub enum StickerTypes: u8 {
        Standard = 1,
        Guild = 2,
    }
}

int_enum! {
    pub enum StickerFormatTypes: u8 {
        Png = 1,
        Apng = 2,
        Lottie = 3,
        Gif = 4,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildStickerResponse {
    pub id: Snowflake,
    pub name: String,
    pub tags: String,
    #[serde(rename = "type")]
    pub kind: StickerTypes,
    pub format_type: StickerFormatTypes,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub description: Option<String>,
    pub available: bool,
    pub guild_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StandardStickerResponse {
    pub id: Snowflake,
    pub name: String,
    pub tags: String,
    #[serde(rename = "type")]
    pub kind: StickerTypes,
    pub format_type: StickerFormatTypes,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub description: Option<String>,
    pub pack_id: Snowflake,
    pub sort_value: i32,
}

tagged_union! {
    pub enum StickerResponse by StickerTypes {
        Standard(StandardStickerResponse) = [Standard],
        Guild(GuildStickerResponse) = [Guild],
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StickerPackResponse {
    pub id: Snowflake,
    pub sku_id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub description: Option<String>,
    pub stickers: Vec<StandardStickerResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_sticker_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_asset_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StickerPackCollectionResponse {
    pub sticker_packs: Vec<StickerPackResponse>,
}

/// Sticker descriptions are either empty or 2-100 characters.
fn check_description(v: &mut Validator<'_>, description: Option<&str>) {
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        v.length("description", description, 2, 100);
    }
}

/// Multipart body for uploading a guild sticker.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateGuildStickerRequest {
    #[schema(min_length = 2, max_length = 30)]
    pub name: String,
    /// Autocomplete keywords, comma separated.
    #[schema(min_length = 1, max_length = 200)]
    pub tags: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 100)]
    pub description: Option<Option<String>>,
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}

impl Validate for CreateGuildStickerRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 2, 30);
        v.length("tags", &self.tags, 1, 200);
        check_description(v, self.description.as_ref().and_then(|d| d.as_deref()));
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateGuildStickerRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 2, max_length = 30)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 1, max_length = 200)]
    pub tags: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 100)]
    pub description: Option<Option<String>>,
}

impl Validate for UpdateGuildStickerRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 2, 30);
        v.length_opt("tags", self.tags.as_deref(), 1, 200);
        check_description(v, self.description.as_ref().and_then(|d| d.as_deref()));
    }
}
