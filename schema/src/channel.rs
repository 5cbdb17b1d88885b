//! Channel and thread schemas.
//!
//! [`ChannelResponse`] is the polymorphic channel body: the `type` literal selects one of the
//! guild, DM, group DM or thread shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::guild::GuildMemberResponse;
use crate::snowflake::Snowflake;
use crate::user::UserResponse;
use crate::validate::{Validate, Validator};

/// Minimum voice bitrate, in bits per second.
pub const MIN_BITRATE: i64 = 8_000;

/// Maximum voice bitrate, reachable with the highest boost tier.
pub const MAX_BITRATE: i64 = 384_000;

/// Longest slowmode, in seconds (6 hours).
pub const MAX_RATE_LIMIT_PER_USER: i64 = 21_600;

int_enum! {
    pub enum ChannelTypes: u8 {
        GuildText = 0,
        Dm = 1,
        GuildVoice = 2,
        GroupDm = 3,
        GuildCategory = 4,
        GuildAnnouncement = 5,
        AnnouncementThread = 10,
        PublicThread = 11,
        PrivateThread = 12,
        GuildStageVoice = 13,
        GuildDirectory = 14,
        GuildForum = 15,
        GuildMedia = 16,
    }
}

impl ChannelTypes {
    /// Types a guild channel can be created with.
    pub const GUILD_CREATABLE: &'static [ChannelTypes] = &[
        ChannelTypes::GuildText,
        ChannelTypes::GuildVoice,
        ChannelTypes::GuildCategory,
        ChannelTypes::GuildAnnouncement,
        ChannelTypes::GuildStageVoice,
        ChannelTypes::GuildDirectory,
        ChannelTypes::GuildForum,
        ChannelTypes::GuildMedia,
    ];

    pub const THREADS: &'static [ChannelTypes] = &[
        ChannelTypes::AnnouncementThread,
        ChannelTypes::PublicThread,
        ChannelTypes::PrivateThread,
    ];
}

int_enum! {
    pub enum ChannelPermissionOverwrites: u8 {
        Role = 0,
        Member = 1,
    }
}

int_enum! {
    pub enum VideoQualityModes: u8 {
        Auto = 1,
        Full = 2,
    }
}

int_enum! {
    /// Minutes of inactivity before a thread is archived.
    pub enum ThreadAutoArchiveDuration: u16 {
        OneHour = 60,
        OneDay = 1440,
        ThreeDays = 4320,
        SevenDays = 10080,
    }
}

int_enum! {
    pub enum ThreadSortOrder: u8 {
        LatestActivity = 0,
        CreationDate = 1,
    }
}

int_enum! {
    pub enum ForumLayout: u8 {
        Default = 0,
        List = 1,
        Grid = 2,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelPermissionOverwriteResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelPermissionOverwrites,
    pub allow: String,
    pub deny: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ForumTagResponse {
    pub id: Snowflake,
    pub name: String,
    pub moderated: bool,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub emoji_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub emoji_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildChannelResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelTypes,
    pub guild_id: Snowflake,
    pub name: String,
    pub position: i32,
    pub flags: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<VideoQualityModes>,
    /// Computed permissions of the invoking user, present on interaction payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<ChannelPermissionOverwriteResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<ThreadAutoArchiveDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_thread_rate_limit_per_user: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_tags: Option<Vec<ForumTagResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_order: Option<ThreadSortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_forum_layout: Option<ForumLayout>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PrivateChannelResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelTypes,
    pub flags: i64,
    pub recipients: Vec<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PrivateGroupChannelResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelTypes,
    pub flags: i64,
    pub recipients: Vec<UserResponse>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub name: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
    pub owner_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ThreadMetadataResponse {
    pub archived: bool,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub archive_timestamp: Option<DateTime<Utc>>,
    pub auto_archive_duration: ThreadAutoArchiveDuration,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ThreadMemberResponse {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub join_timestamp: DateTime<Utc>,
    pub flags: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<GuildMemberResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ThreadResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: ChannelTypes,
    pub guild_id: Snowflake,
    pub name: String,
    pub flags: i64,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub parent_id: Option<Snowflake>,
    pub owner_id: Snowflake,
    pub thread_metadata: ThreadMetadataResponse,
    pub message_count: i32,
    pub member_count: i32,
    pub total_message_sent: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_tags: Option<Vec<Snowflake>>,
    /// The current user's membership, when they have joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<ThreadMemberResponse>,
}

tagged_union! {
    /// Any channel, discriminated by its `type`.
    pub enum ChannelResponse by ChannelTypes {
        Guild(GuildChannelResponse) = [
            GuildText,
            GuildVoice,
            GuildCategory,
            GuildAnnouncement,
            GuildStageVoice,
            GuildDirectory,
            GuildForum,
            GuildMedia,
        ],
        Private(PrivateChannelResponse) = [Dm],
        PrivateGroup(PrivateGroupChannelResponse) = [GroupDm],
        Thread(ThreadResponse) = [AnnouncementThread, PublicThread, PrivateThread],
    }
}

impl ChannelResponse {
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Guild(channel) => channel.id,
            Self::Private(channel) => channel.id,
            Self::PrivateGroup(channel) => channel.id,
            Self::Thread(thread) => thread.id,
        }
    }
}

/// A page of threads together with the caller's memberships in them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ThreadsResponse {
    pub threads: Vec<ThreadResponse>,
    pub members: Vec<ThreadMemberResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelPermissionOverwriteRequest {
    pub id: Snowflake,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub kind: Option<ChannelPermissionOverwrites>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub allow: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub deny: Option<Option<String>>,
}

impl Validate for ChannelPermissionOverwriteRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        if let Some(Some(allow)) = &self.allow {
            v.bitfield("allow", allow);
        }
        if let Some(Some(deny)) = &self.deny {
            v.bitfield("deny", deny);
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CreateGuildChannelRequest {
    #[schema(min_length = 1, max_length = 100)]
    pub name: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub kind: Option<Option<ChannelTypes>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 4096)]
    pub topic: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub position: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 8000)]
    pub bitrate: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 99)]
    pub user_limit: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub nsfw: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 21600)]
    pub rate_limit_per_user: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub parent_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 100)]
    pub permission_overwrites: Option<Option<Vec<ChannelPermissionOverwriteRequest>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub rtc_region: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub video_quality_mode: Option<Option<VideoQualityModes>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub default_auto_archive_duration: Option<Option<ThreadAutoArchiveDuration>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 21600)]
    pub default_thread_rate_limit_per_user: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub default_sort_order: Option<Option<ThreadSortOrder>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub default_forum_layout: Option<Option<ForumLayout>>,
}

impl Validate for CreateGuildChannelRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 1, 100);
        if let Some(Some(kind)) = &self.kind {
            v.one_of("type", kind, ChannelTypes::GUILD_CREATABLE);
        }
        v.length_opt(
            "topic",
            self.topic.as_ref().and_then(|t| t.as_deref()),
            0,
            4096,
        );
        v.range_opt("bitrate", self.bitrate.flatten(), MIN_BITRATE, MAX_BITRATE);
        v.range_opt("user_limit", self.user_limit.flatten(), 0, 99);
        v.range_opt(
            "rate_limit_per_user",
            self.rate_limit_per_user.flatten(),
            0,
            MAX_RATE_LIMIT_PER_USER,
        );
        v.range_opt(
            "default_thread_rate_limit_per_user",
            self.default_thread_rate_limit_per_user.flatten(),
            0,
            MAX_RATE_LIMIT_PER_USER,
        );

        let overwrites = self.permission_overwrites.as_ref().and_then(|o| o.as_deref());
        v.items_opt("permission_overwrites", overwrites, 0, 100);
        v.each_opt("permission_overwrites", overwrites);
    }
}

/// Partial update of any channel kind; fields that do not apply to the target are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateChannelRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 1, max_length = 100)]
    pub name: Option<String>,
    /// Group DM icon as a data URI.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub icon: Option<Option<String>>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub kind: Option<Option<ChannelTypes>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub position: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 4096)]
    pub topic: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub nsfw: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 21600)]
    pub rate_limit_per_user: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 8000)]
    pub bitrate: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 99)]
    pub user_limit: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 100)]
    pub permission_overwrites: Option<Option<Vec<ChannelPermissionOverwriteRequest>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub parent_id: Option<Option<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub rtc_region: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub video_quality_mode: Option<Option<VideoQualityModes>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub default_auto_archive_duration: Option<Option<ThreadAutoArchiveDuration>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub archived: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub locked: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub invitable: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub auto_archive_duration: Option<ThreadAutoArchiveDuration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(max_items = 5)]
    pub applied_tags: Option<Vec<Snowflake>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub flags: Option<i64>,
}

impl Validate for UpdateChannelRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 1, 100);
        v.length_opt(
            "topic",
            self.topic.as_ref().and_then(|t| t.as_deref()),
            0,
            4096,
        );
        v.range_opt(
            "rate_limit_per_user",
            self.rate_limit_per_user.flatten(),
            0,
            MAX_RATE_LIMIT_PER_USER,
        );
        v.range_opt("bitrate", self.bitrate.flatten(), MIN_BITRATE, MAX_BITRATE);
        v.range_opt("user_limit", self.user_limit.flatten(), 0, 99);
        v.items_opt("applied_tags", self.applied_tags.as_deref(), 0, 5);

        let overwrites = self.permission_overwrites.as_ref().and_then(|o| o.as_deref());
        v.items_opt("permission_overwrites", overwrites, 0, 100);
        v.each_opt("permission_overwrites", overwrites);
    }
}

/// Starts a thread that is not attached to a message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateThreadRequest {
    #[schema(min_length = 1, max_length = 100)]
    pub name: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub kind: Option<ChannelTypes>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub auto_archive_duration: Option<ThreadAutoArchiveDuration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 21600)]
    pub rate_limit_per_user: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub invitable: Option<bool>,
}

impl Validate for CreateThreadRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 1, 100);
        if let Some(kind) = &self.kind {
            v.one_of("type", kind, ChannelTypes::THREADS);
        }
        v.range_opt(
            "rate_limit_per_user",
            self.rate_limit_per_user.flatten(),
            0,
            MAX_RATE_LIMIT_PER_USER,
        );
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateThreadFromMessageRequest {
    #[schema(min_length = 1, max_length = 100)]
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub auto_archive_duration: Option<ThreadAutoArchiveDuration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(minimum = 0, maximum = 21600)]
    pub rate_limit_per_user: Option<Option<i64>>,
}

impl Validate for CreateThreadFromMessageRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 1, 100);
        v.range_opt(
            "rate_limit_per_user",
            self.rate_limit_per_user.flatten(),
            0,
            MAX_RATE_LIMIT_PER_USER,
        );
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FollowChannelRequest {
    pub webhook_channel_id: Snowflake,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FollowedChannelResponse {
    pub channel_id: Snowflake,
    pub webhook_id: Snowflake,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_channel() -> serde_json::Value {
        json!({
            "id": "41771983423143937",
            "type": 0,
            "guild_id": "41771983423143937",
            "name": "general",
            "position": 6,
            "flags": 0,
            "topic": null,
            "nsfw": false
        })
    }

    /// Tests that the channel union dispatches guild channel types.
    ///
    /// Expected: Ok(ChannelResponse::Guild) with kind GuildText
    #[test]
    fn channel_union_selects_guild_shape() {
        let channel: ChannelResponse = serde_json::from_value(text_channel()).unwrap();

        assert!(matches!(channel, ChannelResponse::Guild(_)));
        assert_eq!(channel.kind(), ChannelTypes::GuildText);
        assert_eq!(channel.id(), Snowflake::new(41771983423143937));
    }

    /// Tests that a DM missing its recipients fails rather than falling through to another shape.
    ///
    /// Expected: Err
    #[test]
    fn channel_union_checks_selected_shape_only() {
        let dm = json!({ "id": "1", "type": 1, "flags": 0 });
        assert!(serde_json::from_value::<ChannelResponse>(dm).is_err());
    }

    /// Tests that a thread body requires its metadata.
    ///
    /// Expected: Ok with metadata present, Err without
    #[test]
    fn thread_requires_metadata() {
        let mut thread = json!({
            "id": "2",
            "type": 11,
            "guild_id": "3",
            "name": "help",
            "flags": 0,
            "parent_id": "4",
            "owner_id": "5",
            "thread_metadata": {
                "archived": false,
                "archive_timestamp": null,
                "auto_archive_duration": 1440,
                "locked": false
            },
            "message_count": 0,
            "member_count": 1,
            "total_message_sent": 0
        });
        assert!(serde_json::from_value::<ChannelResponse>(thread.clone()).is_ok());

        thread.as_object_mut().unwrap().remove("thread_metadata");
        assert!(serde_json::from_value::<ChannelResponse>(thread).is_err());
    }

    /// Tests every numeric bound on guild channel creation at once.
    ///
    /// Expected: Err with one failure per out-of-range field
    #[test]
    fn create_channel_reports_each_bound() {
        let request: CreateGuildChannelRequest = serde_json::from_value(json!({
            "name": "",
            "bitrate": 7999,
            "user_limit": 100,
            "rate_limit_per_user": 21601
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["name"]), vec!["BASE_TYPE_BAD_LENGTH"]);
        assert_eq!(details.codes_at(&["bitrate"]), vec!["NUMBER_TYPE_MIN"]);
        assert_eq!(details.codes_at(&["user_limit"]), vec!["NUMBER_TYPE_MAX"]);
        assert_eq!(
            details.codes_at(&["rate_limit_per_user"]),
            vec!["NUMBER_TYPE_MAX"]
        );
    }

    /// Tests that threads cannot be created through the guild channel body.
    ///
    /// Expected: Err with BASE_TYPE_CHOICES at `type`
    #[test]
    fn create_channel_rejects_thread_type() {
        let request: CreateGuildChannelRequest =
            serde_json::from_value(json!({ "name": "t", "type": 11 })).unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(details.codes_at(&["type"]), vec!["BASE_TYPE_CHOICES"]);
    }

    /// Tests that overwrite bitfields are checked per item.
    ///
    /// Expected: Err at `permission_overwrites.1.allow`
    #[test]
    fn create_channel_checks_overwrites() {
        let request: CreateGuildChannelRequest = serde_json::from_value(json!({
            "name": "staff",
            "permission_overwrites": [
                { "id": "1", "type": 0, "allow": "1024", "deny": "0" },
                { "id": "2", "type": 1, "allow": "-1" }
            ]
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["permission_overwrites", "1", "allow"]),
            vec!["BASE_TYPE_INVALID"]
        );
        assert!(details.get(&["permission_overwrites", "0"]).is_none());
    }

    /// Tests the archive duration literals.
    ///
    /// Expected: 4320 accepted, 120 rejected
    #[test]
    fn archive_duration_is_literal() {
        assert!(serde_json::from_value::<ThreadAutoArchiveDuration>(json!(4320)).is_ok());
        assert!(serde_json::from_value::<ThreadAutoArchiveDuration>(json!(120)).is_err());
    }
}
