use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::emoji::EmojiResponse;
use crate::snowflake::Snowflake;
use crate::sticker::GuildStickerResponse;
use crate::user::UserResponse;
use crate::validate::{Validate, Validator};

/// Largest RGB value a role color may take.
pub const MAX_COLOR: i64 = 0xFF_FF_FF;

/// Longest window of messages a ban may purge, in seconds (7 days).
pub const MAX_DELETE_MESSAGE_SECONDS: i64 = 604_800;

int_enum! {
    pub enum VerificationLevels: u8 {
        None = 0,
        Low = 1,
        Medium = 2,
        High = 3,
        VeryHigh = 4,
    }
}

int_enum! {
    pub enum GuildExplicitContentFilterTypes: u8 {
        Disabled = 0,
        MembersWithoutRoles = 1,
        AllMembers = 2,
    }
}

int_enum! {
    pub enum UserNotificationSettings: u8 {
        AllMessages = 0,
        OnlyMentions = 1,
    }
}

int_enum! {
    pub enum GuildMFALevel: u8 {
        None = 0,
        Elevated = 1,
    }
}

int_enum! {
    pub enum GuildNSFWContentLevel: u8 {
        Default = 0,
        Explicit = 1,
        Safe = 2,
        AgeRestricted = 3,
    }
}

int_enum! {
    pub enum PremiumGuildTiers: u8 {
        None = 0,
        Tier1 = 1,
        Tier2 = 2,
        Tier3 = 3,
    }
}

int_enum! {
    /// Seconds of inactivity before a member is moved to the AFK channel.
    pub enum AfkTimeouts: u16 {
        OneMinute = 60,
        FiveMinutes = 300,
        FifteenMinutes = 900,
        ThirtyMinutes = 1800,
        OneHour = 3600,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct GuildRoleTagsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_listing_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildRoleResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub description: Option<String>,
    /// Permission bitfield as a decimal string.
    pub permissions: String,
    pub position: i32,
    pub color: i32,
    pub hoist: bool,
    pub managed: bool,
    pub mentionable: bool,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub unicode_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<GuildRoleTagsResponse>,
    pub flags: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub description: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub splash: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub discovery_splash: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub banner: Option<String>,
    pub features: Vec<String>,
    pub owner_id: Snowflake,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub application_id: Option<Snowflake>,
    pub region: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub afk_channel_id: Option<Snowflake>,
    pub afk_timeout: AfkTimeouts,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub system_channel_id: Option<Snowflake>,
    pub system_channel_flags: i64,
    pub widget_enabled: bool,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub widget_channel_id: Option<Snowflake>,
    pub verification_level: VerificationLevels,
    pub roles: Vec<GuildRoleResponse>,
    pub default_message_notifications: UserNotificationSettings,
    pub mfa_level: GuildMFALevel,
    pub explicit_content_filter: GuildExplicitContentFilterTypes,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub max_presences: Option<i32>,
    pub max_members: i32,
    pub max_video_channel_users: i32,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub vanity_url_code: Option<String>,
    pub premium_tier: PremiumGuildTiers,
    pub premium_subscription_count: i32,
    pub preferred_locale: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub rules_channel_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub public_updates_channel_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub safety_alerts_channel_id: Option<Snowflake>,
    pub premium_progress_bar_enabled: bool,
    pub nsfw: bool,
    pub nsfw_level: GuildNSFWContentLevel,
    pub emojis: Vec<EmojiResponse>,
    pub stickers: Vec<GuildStickerResponse>,
    /// Present when requested with `with_counts=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<i32>,
}

/// Partial guild returned when listing the current user's guilds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MyGuildResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub banner: Option<String>,
    pub owner: bool,
    pub permissions: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildMemberResponse {
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub communication_disabled_until: Option<DateTime<Utc>>,
    pub flags: i64,
    pub joined_at: DateTime<Utc>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub nick: Option<String>,
    pub pending: bool,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub premium_since: Option<DateTime<Utc>>,
    pub roles: Vec<Snowflake>,
    pub user: UserResponse,
    pub mute: bool,
    pub deaf: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildBanResponse {
    pub user: UserResponse,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct GuildPatchRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 2, max_length = 100)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 300)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub region: Option<Option<String>>,
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
    pub splash: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub banner: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub verification_level: Option<Option<VerificationLevels>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub default_message_notifications: Option<Option<UserNotificationSettings>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub explicit_content_filter: Option<Option<GuildExplicitContentFilterTypes>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub preferred_locale: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub afk_timeout: Option<AfkTimeouts>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub afk_channel_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub system_channel_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub owner_id: Option<Snowflake>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub system_channel_flags: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(max_items = 1521)]
    pub features: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub rules_channel_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub public_updates_channel_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub premium_progress_bar_enabled: Option<bool>,
}

impl Validate for GuildPatchRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 2, 100);
        v.length_opt(
            "description",
            self.description.as_ref().and_then(|d| d.as_deref()),
            0,
            300,
        );
        v.items_opt("features", self.features.as_deref(), 0, 1521);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CreateRoleRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(max_length = 100)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub permissions: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(minimum = 0, maximum = 16777215)]
    pub color: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub hoist: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub mentionable: Option<bool>,
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
    pub unicode_emoji: Option<Option<String>>,
}

impl Validate for CreateRoleRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 0, 100);
        if let Some(permissions) = &self.permissions {
            v.bitfield("permissions", permissions);
        }
        v.range_opt("color", self.color, 0, MAX_COLOR);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateRoleRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 100)]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub permissions: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 16777215)]
    pub color: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub hoist: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub mentionable: Option<Option<bool>>,
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
    pub unicode_emoji: Option<Option<String>>,
}

impl Validate for UpdateRoleRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_ref().and_then(|n| n.as_deref()), 0, 100);
        if let Some(Some(permissions)) = &self.permissions {
            v.bitfield("permissions", permissions);
        }
        v.range_opt("color", self.color.flatten(), 0, MAX_COLOR);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateGuildMemberRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 32)]
    pub nick: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 350)]
    pub roles: Option<Option<Vec<Snowflake>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub mute: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub deaf: Option<Option<bool>>,
    /// Voice channel to move the member to; `null` disconnects them.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub channel_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub communication_disabled_until: Option<Option<DateTime<Utc>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub flags: Option<Option<i64>>,
}

impl Validate for UpdateGuildMemberRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("nick", self.nick.as_ref().and_then(|n| n.as_deref()), 0, 32);
        v.items_opt(
            "roles",
            self.roles.as_ref().and_then(|r| r.as_deref()),
            0,
            350,
        );
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct BanUserFromGuildRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(minimum = 0, maximum = 604800)]
    pub delete_message_seconds: Option<i64>,
    /// Superseded by `delete_message_seconds`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(minimum = 0, maximum = 7)]
    pub delete_message_days: Option<i64>,
}

impl Validate for BanUserFromGuildRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.range_opt(
            "delete_message_seconds",
            self.delete_message_seconds,
            0,
            MAX_DELETE_MESSAGE_SECONDS,
        );
        v.range_opt("delete_message_days", self.delete_message_days, 0, 7);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests role color bounds.
    ///
    /// Expected: Err with NUMBER_TYPE_MAX at `color` for 0x1000000
    #[test]
    fn create_role_rejects_out_of_range_color() {
        let request: CreateRoleRequest =
            serde_json::from_value(json!({ "name": "mods", "color": 0x1000000 })).unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["color"]), vec!["NUMBER_TYPE_MAX"]);
    }

    /// Tests permission bitfield format.
    ///
    /// Expected: Err with BASE_TYPE_INVALID at `permissions`
    #[test]
    fn create_role_rejects_non_decimal_permissions() {
        let request = CreateRoleRequest {
            permissions: Some("0x8".into()),
            ..Default::default()
        };

        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["permissions"]), vec!["BASE_TYPE_INVALID"]);
    }

    /// Tests that clearing a nickname is distinct from leaving it unchanged.
    ///
    /// Expected: `null` parsed as Some(None), absent as None
    #[test]
    fn member_patch_distinguishes_clear_from_absent() {
        let cleared: UpdateGuildMemberRequest =
            serde_json::from_value(json!({ "nick": null })).unwrap();
        assert_eq!(cleared.nick, Some(None));

        let untouched: UpdateGuildMemberRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(untouched.nick, None);
    }

    /// Tests the ban purge window.
    ///
    /// Expected: 604800 accepted, 604801 rejected
    #[test]
    fn ban_checks_purge_window() {
        let ok = BanUserFromGuildRequest {
            delete_message_seconds: Some(MAX_DELETE_MESSAGE_SECONDS),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let too_long = BanUserFromGuildRequest {
            delete_message_seconds: Some(MAX_DELETE_MESSAGE_SECONDS + 1),
            ..Default::default()
        };
        assert!(too_long.validate().is_err());
    }

    /// Tests that AFK timeouts only accept declared durations.
    ///
    /// Expected: 300 accepted, 301 rejected
    #[test]
    fn afk_timeout_is_literal() {
        assert!(serde_json::from_value::<AfkTimeouts>(json!(300)).is_ok());
        assert!(serde_json::from_value::<AfkTimeouts>(json!(301)).is_err());
    }
}
