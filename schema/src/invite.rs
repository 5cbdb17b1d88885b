use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::channel::ChannelTypes;
use crate::guild::{GuildNSFWContentLevel, VerificationLevels};
use crate::snowflake::Snowflake;
use crate::user::UserResponse;
use crate::validate::{Validate, Validator};

/// Longest invite lifetime, in seconds (7 days). Zero means never expires.
pub const MAX_INVITE_AGE: i64 = 604_800;

int_enum! {
    pub enum InviteTypes: u8 {
        Guild = 0,
        GroupDm = 1,
        Friend = 2,
    }
}

int_enum! {
    pub enum InviteTargetTypes: u8 {
        Stream = 1,
        EmbeddedApplication = 2,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InviteGuildResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub splash: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub banner: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub description: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
    pub features: Vec<String>,
    pub verification_level: VerificationLevels,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub vanity_url_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw_level: Option<GuildNSFWContentLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_subscription_count: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InviteChannelResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelTypes,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Guild, group DM and friend invites share this shape; guild-only fields are absent on the
/// others.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InviteResponse {
    #[serde(rename = "type")]
    pub kind: InviteTypes,
    pub code: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub channel: Option<InviteChannelResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inviter: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<InviteGuildResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<InviteTargetTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    /// Metadata, present when listing a channel's or guild's invites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CreateChannelInviteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 604800)]
    pub max_age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 100)]
    pub max_uses: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<InviteTargetTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_application_id: Option<Snowflake>,
}

impl Validate for CreateChannelInviteRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.range_opt("max_age", self.max_age, 0, MAX_INVITE_AGE);
        v.range_opt("max_uses", self.max_uses, 0, 100);

        match self.target_type {
            Some(InviteTargetTypes::Stream) if self.target_user_id.is_none() => {
                v.required("target_user_id")
            }
            Some(InviteTargetTypes::EmbeddedApplication)
                if self.target_application_id.is_none() =>
            {
                v.required("target_application_id")
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests invite creation bounds.
    ///
    /// Expected: Err at `max_age` and `max_uses`
    #[test]
    fn create_invite_bounds() {
        let request = CreateChannelInviteRequest {
            max_age: Some(MAX_INVITE_AGE + 1),
            max_uses: Some(101),
            ..Default::default()
        };

        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["max_age"]), vec!["NUMBER_TYPE_MAX"]);
        assert_eq!(details.codes_at(&["max_uses"]), vec!["NUMBER_TYPE_MAX"]);
    }

    /// Tests that stream invites name the streaming user.
    ///
    /// Expected: Err with BASE_TYPE_REQUIRED at `target_user_id`
    #[test]
    fn stream_invite_needs_target_user() {
        let request: CreateChannelInviteRequest =
            serde_json::from_value(json!({ "target_type": 1 })).unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["target_user_id"]),
            vec!["BASE_TYPE_REQUIRED"]
        );
    }

    /// Tests a friend invite, which has no channel.
    ///
    /// Expected: Ok with `channel` null and no guild
    #[test]
    fn parses_friend_invite() {
        let invite: InviteResponse = serde_json::from_value(json!({
            "type": 2,
            "code": "abcdef",
            "channel": null
        }))
        .unwrap();

        assert_eq!(invite.kind, InviteTypes::Friend);
        assert!(invite.channel.is_none());
        assert!(invite.guild.is_none());
    }
}
