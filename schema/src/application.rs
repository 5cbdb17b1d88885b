use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::oauth2::OAuth2Scopes;
use crate::snowflake::Snowflake;
use crate::user::UserResponse;
use crate::validate::{Validate, ValidationCode, Validator};

/// Default scopes and permissions for the in-app authorization link.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationOAuth2InstallParamsResponse {
    pub scopes: Vec<OAuth2Scopes>,
    pub permissions: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationOAuth2InstallParams {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub scopes: Option<Option<Vec<OAuth2Scopes>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub permissions: Option<Option<String>>,
}

impl Validate for ApplicationOAuth2InstallParams {
    fn validate_with(&self, v: &mut Validator<'_>) {
        if let Some(Some(permissions)) = &self.permissions {
            v.bitfield("permissions", permissions);
        }
        if let Some(Some(scopes)) = &self.scopes {
            let mut seen = Vec::with_capacity(scopes.len());
            for scope in scopes {
                if seen.contains(scope) {
                    v.fail_field(
                        "scopes",
                        ValidationCode::BaseTypeInvalid,
                        format!("Duplicate scope '{}'.", scope.as_str()),
                    );
                }
                seen.push(*scope);
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
    pub description: String,
    pub verify_key: String,
    pub flags: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_sku_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_origins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_require_code_grant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_install_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_params: Option<ApplicationOAuth2InstallParamsResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,
}

/// The application as seen by its owner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PrivateApplicationResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub owner: UserResponse,
    pub redirect_uris: Vec<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub interactions_endpoint_url: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub role_connections_verification_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_guild_count: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateApplicationRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 400)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub icon: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub cover_image: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub install_params: Option<Option<ApplicationOAuth2InstallParams>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 2048)]
    pub custom_install_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 2048)]
    pub interactions_endpoint_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 2048)]
    pub role_connections_verification_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub flags: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 5)]
    pub tags: Option<Option<Vec<String>>>,
}

impl Validate for UpdateApplicationRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        fn text(field: &Option<Option<String>>) -> Option<&str> {
            field.as_ref().and_then(|s| s.as_deref())
        }

        v.length_opt("description", text(&self.description), 0, 400);
        v.length_opt("custom_install_url", text(&self.custom_install_url), 0, 2048);
        v.length_opt(
            "interactions_endpoint_url",
            text(&self.interactions_endpoint_url),
            0,
            2048,
        );
        v.length_opt(
            "role_connections_verification_url",
            text(&self.role_connections_verification_url),
            0,
            2048,
        );
        v.nested_opt(
            "install_params",
            self.install_params.as_ref().and_then(Option::as_ref),
        );

        if let Some(Some(tags)) = &self.tags {
            v.items("tags", tags, 0, 5);
            let mut list = v.field("tags");
            for (i, tag) in tags.iter().enumerate() {
                let len = tag.chars().count();
                if len == 0 || len > 20 {
                    list.index(i).fail(
                        ValidationCode::BaseTypeBadLength,
                        "Must be between 1 and 20 in length.",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that the owner view flattens the public application fields.
    ///
    /// Expected: Ok with `name` and `redirect_uris` populated
    #[test]
    fn private_application_flattens_public_fields() {
        let application: PrivateApplicationResponse = serde_json::from_value(json!({
            "id": "172150183260323840",
            "name": "Baba O-Riley",
            "icon": null,
            "description": "Test",
            "verify_key": "1e0a356058d627ca38a5c8c9648818061d49e49bd9da9e3ab17d98ad4d6bg2u8",
            "flags": 0,
            "owner": {
                "id": "172150183260323840",
                "username": "i own a bot",
                "avatar": null,
                "discriminator": "0",
                "public_flags": 0,
                "flags": 0,
                "global_name": null
            },
            "redirect_uris": ["https://example.com/callback"],
            "interactions_endpoint_url": null,
            "role_connections_verification_url": null
        }))
        .unwrap();

        assert_eq!(application.application.name, "Baba O-Riley");
        assert_eq!(application.redirect_uris.len(), 1);
    }

    /// Tests tag limits on the application patch.
    ///
    /// Expected: Err at `tags` for six tags and at `tags.0` for a 21-character tag
    #[test]
    fn patch_checks_tags() {
        let request = UpdateApplicationRequest {
            tags: Some(Some(vec![
                "t".repeat(21),
                "a".into(),
                "b".into(),
                "c".into(),
                "d".into(),
                "e".into(),
            ])),
            ..Default::default()
        };

        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["tags"]), vec!["BASE_TYPE_MAX_LENGTH"]);
        assert_eq!(details.codes_at(&["tags", "0"]), vec!["BASE_TYPE_BAD_LENGTH"]);
    }

    /// Tests duplicate install scopes.
    ///
    /// Expected: Err at `install_params.scopes`
    #[test]
    fn install_params_reject_duplicate_scopes() {
        let request: UpdateApplicationRequest = serde_json::from_value(json!({
            "install_params": { "scopes": ["bot", "bot"], "permissions": "8" }
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["install_params", "scopes"]),
            vec!["BASE_TYPE_INVALID"]
        );
    }
}
