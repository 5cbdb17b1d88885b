use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::snowflake::Snowflake;
use crate::validate::{Validate, Validator};

int_enum! {
    /// Nitro subscription level.
    pub enum PremiumTypes: u8 {
        None = 0,
        TierOne = 1,
        TierTwo = 2,
        TierZero = 3,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserAvatarDecorationResponse {
    pub asset: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub sku_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserResponse {
    pub id: Snowflake,
    pub username: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub avatar: Option<String>,
    pub discriminator: String,
    pub public_flags: i64,
    pub flags: i64,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub global_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_data: Option<UserAvatarDecorationResponse>,
}

/// The current user, including fields only visible to themselves.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserPIIResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub mfa_enabled: bool,
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BotAccountPatchRequest {
    #[schema(min_length = 2, max_length = 32)]
    pub username: String,
    /// Data URI of the new avatar; `null` removes it.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub avatar: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub banner: Option<Option<String>>,
}

impl Validate for BotAccountPatchRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("username", &self.username, 2, 32);
    }
}

/// Opens a DM with `recipient_id`, or a group DM from OAuth2 `access_tokens`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CreatePrivateChannelRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub recipient_id: Option<Snowflake>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(max_items = 1521)]
    pub access_tokens: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub nicks: Option<BTreeMap<String, String>>,
}

impl Validate for CreatePrivateChannelRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        if self.recipient_id.is_none() && self.access_tokens.is_none() {
            v.required("recipient_id");
        }
        v.items_opt("access_tokens", self.access_tokens.as_deref(), 1, 1521);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_json() -> serde_json::Value {
        json!({
            "id": "80351110224678912",
            "username": "nelly",
            "avatar": null,
            "discriminator": "0",
            "public_flags": 64,
            "flags": 64,
            "global_name": "Nelly"
        })
    }

    /// Tests that a minimal user parses with optional keys absent.
    ///
    /// Expected: Ok with `bot` unset
    #[test]
    fn parses_minimal_user() {
        let user: UserResponse = serde_json::from_value(user_json()).unwrap();
        assert_eq!(user.id, Snowflake::new(80351110224678912));
        assert_eq!(user.avatar, None);
        assert_eq!(user.bot, None);
    }

    /// Tests that the required nullable `avatar` key cannot be omitted.
    ///
    /// Expected: Err
    #[test]
    fn avatar_key_is_required() {
        let mut value = user_json();
        value.as_object_mut().unwrap().remove("avatar");

        assert!(serde_json::from_value::<UserResponse>(value).is_err());
    }

    /// Tests that the PII view flattens the public user fields.
    ///
    /// Expected: Ok with both public and private fields populated
    #[test]
    fn pii_response_flattens_user() {
        let mut value = user_json();
        let object = value.as_object_mut().unwrap();
        object.insert("mfa_enabled".into(), json!(true));
        object.insert("locale".into(), json!("en-US"));
        object.insert("premium_type".into(), json!(2));

        let user: UserPIIResponse = serde_json::from_value(value).unwrap();
        assert_eq!(user.user.username, "nelly");
        assert_eq!(user.premium_type, Some(PremiumTypes::TierTwo));
    }

    /// Tests username bounds on the bot account patch.
    ///
    /// Expected: Err at `username` for a one-character name
    #[test]
    fn bot_patch_checks_username_length() {
        let request: BotAccountPatchRequest =
            serde_json::from_value(json!({ "username": "a", "avatar": null })).unwrap();

        assert_eq!(request.avatar, Some(None));
        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["username"]), vec!["BASE_TYPE_BAD_LENGTH"]);
    }

    /// Tests that a DM request needs a recipient or access tokens.
    ///
    /// Expected: Err with BASE_TYPE_REQUIRED at `recipient_id`
    #[test]
    fn private_channel_needs_target() {
        let details = CreatePrivateChannelRequest::default().validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["recipient_id"]),
            vec!["BASE_TYPE_REQUIRED"]
        );
    }
}
