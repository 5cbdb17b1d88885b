//! Message schemas.
//!
//! [`MessageResponse`] extends [`BasicMessageResponse`] with reactions and the message it
//! replies to. The referenced message is itself a [`BasicMessageResponse`], boxed, so a reply
//! chain is one level deep on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::channel::{ChannelTypes, ThreadResponse};
use crate::component::{validate_rows, MessageComponent};
use crate::embed::{validate_embeds, MessageEmbedResponse, RichEmbed};
use crate::interaction::InteractionTypes;
use crate::snowflake::Snowflake;
use crate::sticker::StickerFormatTypes;
use crate::user::UserResponse;
use crate::validate::{Validate, ValidationCode, Validator};

pub const MAX_CONTENT_LENGTH: usize = 4000;
pub const MAX_EMBEDS: usize = 10;
pub const MAX_STICKERS: usize = 3;
pub const MAX_ATTACHMENTS: usize = 10;
pub const MAX_NONCE_LENGTH: usize = 25;

int_enum! {
    pub enum MessageType: u8 {
        Default = 0,
        RecipientAdd = 1,
        RecipientRemove = 2,
        Call = 3,
        ChannelNameChange = 4,
        ChannelIconChange = 5,
        ChannelPinnedMessage = 6,
        UserJoin = 7,
        GuildBoost = 8,
        GuildBoostTier1 = 9,
        GuildBoostTier2 = 10,
        GuildBoostTier3 = 11,
        ChannelFollowAdd = 12,
        GuildDiscoveryDisqualified = 14,
        GuildDiscoveryRequalified = 15,
        GuildDiscoveryGracePeriodInitialWarning = 16,
        GuildDiscoveryGracePeriodFinalWarning = 17,
        ThreadCreated = 18,
        Reply = 19,
        ChatInputCommand = 20,
        ThreadStarterMessage = 21,
        GuildInviteReminder = 22,
        ContextMenuCommand = 23,
        AutoModerationAction = 24,
        RoleSubscriptionPurchase = 25,
        InteractionPremiumUpsell = 26,
        StageStart = 27,
        StageEnd = 28,
        StageSpeaker = 29,
        StageTopic = 31,
        GuildApplicationPremiumSubscription = 32,
        GuildIncidentAlertModeEnabled = 36,
        GuildIncidentAlertModeDisabled = 37,
        GuildIncidentReportRaid = 38,
        GuildIncidentReportFalseAlarm = 39,
        PurchaseNotification = 44,
        PollResult = 46,
    }
}

int_enum! {
    pub enum MessageReferenceType: u8 {
        Default = 0,
        Forward = 1,
    }
}

int_enum! {
    /// Which reactions to list: regular ones or super reactions.
    pub enum ReactionTypes: u8 {
        Normal = 0,
        Burst = 1,
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllowedMentionTypes {
    Users,
    Roles,
    Everyone,
}

/// Client-chosen value echoed back in the create event, either an integer or a short string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum MessageNonce {
    Integer(i64),
    String(String),
}

impl Validate for MessageNonce {
    fn validate_with(&self, v: &mut Validator<'_>) {
        if let Self::String(nonce) = self {
            if nonce.chars().count() > MAX_NONCE_LENGTH {
                v.fail(
                    ValidationCode::BaseTypeMaxLength,
                    format!("Must be {} or fewer in length.", MAX_NONCE_LENGTH),
                );
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageAttachmentResponse {
    pub id: Snowflake,
    pub filename: String,
    pub size: i64,
    pub url: String,
    pub proxy_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageReactionCountDetailsResponse {
    pub burst: i32,
    pub normal: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageReactionEmojiResponse {
    /// `null` for unicode emoji.
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageReactionResponse {
    pub emoji: MessageReactionEmojiResponse,
    pub count: i32,
    pub count_details: MessageReactionCountDetailsResponse,
    pub burst_colors: Vec<String>,
    pub me_burst: bool,
    pub me: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageMentionChannelResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelTypes,
    pub guild_id: Snowflake,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageReferenceResponse {
    pub channel_id: Snowflake,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageStickerItemResponse {
    pub id: Snowflake,
    pub name: String,
    pub format_type: StickerFormatTypes,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageInteractionResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: InteractionTypes,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

/// A message without reactions or a referenced message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BasicMessageResponse {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub content: String,
    pub author: UserResponse,
    pub mentions: Vec<UserResponse>,
    pub mention_roles: Vec<Snowflake>,
    pub mention_everyone: bool,
    pub attachments: Vec<MessageAttachmentResponse>,
    pub embeds: Vec<MessageEmbedResponse>,
    pub components: Vec<MessageComponent>,
    pub timestamp: DateTime<Utc>,
    pub flags: i64,
    pub pinned: bool,
    pub tts: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_channels: Option<Vec<MessageMentionChannelResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_items: Option<Vec<MessageStickerItemResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReferenceResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<MessageInteractionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread: Option<ThreadResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<MessageNonce>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageResponse {
    #[serde(flatten)]
    pub message: BasicMessageResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<MessageReactionResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_message: Option<Box<BasicMessageResponse>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct MessageAllowedMentionsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 1521)]
    pub parse: Option<Vec<AllowedMentionTypes>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 100)]
    pub users: Option<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 100)]
    pub roles: Option<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_user: Option<bool>,
}

impl MessageAllowedMentionsRequest {
    fn parses(&self, kind: AllowedMentionTypes) -> bool {
        self.parse.iter().flatten().any(|parsed| *parsed == kind)
    }
}

impl Validate for MessageAllowedMentionsRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.items_opt("users", self.users.as_deref(), 0, 100);
        v.items_opt("roles", self.roles.as_deref(), 0, 100);

        // An explicit id list and the matching parse type are mutually exclusive.
        if self.users.is_some() && self.parses(AllowedMentionTypes::Users) {
            v.fail_field(
                "users",
                ValidationCode::BaseTypeInvalid,
                "users cannot be set while parse contains \"users\".",
            );
        }
        if self.roles.is_some() && self.parses(AllowedMentionTypes::Roles) {
            v.fail_field(
                "roles",
                ValidationCode::BaseTypeInvalid,
                "roles cannot be set while parse contains \"roles\".",
            );
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageReferenceRequest {
    pub message_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_if_not_exists: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageReferenceType>,
}

/// An attachment is named either by the index of an uploaded file part or by the id of an
/// attachment already on the message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum AttachmentId {
    Index(u32),
    Id(Snowflake),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageAttachmentRequest {
    pub id: AttachmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 1024)]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 1024)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 400)]
    pub waveform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_remix: Option<bool>,
}

impl Validate for MessageAttachmentRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("filename", self.filename.as_deref(), 0, 1024);
        v.length_opt("description", self.description.as_deref(), 0, 1024);
        v.length_opt("waveform", self.waveform.as_deref(), 0, 400);
        if let Some(duration) = self.duration_secs {
            v.float_range("duration_secs", duration, 0.0, f64::from(u32::MAX));
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct MessageCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 4000)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 10)]
    pub embeds: Option<Vec<RichEmbed>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<MessageAllowedMentionsRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 3)]
    pub sticker_ids: Option<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 5)]
    pub components: Option<Vec<MessageComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 10)]
    pub attachments: Option<Vec<MessageAttachmentRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReferenceRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<MessageNonce>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_nonce: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}

impl MessageCreateRequest {
    /// Whether the message carries anything to display.
    pub fn has_body(&self) -> bool {
        fn filled<T>(items: &Option<Vec<T>>) -> bool {
            items.as_ref().is_some_and(|items| !items.is_empty())
        }

        self.content.as_deref().is_some_and(|c| !c.is_empty())
            || filled(&self.embeds)
            || filled(&self.sticker_ids)
            || filled(&self.components)
            || filled(&self.attachments)
    }
}

impl Validate for MessageCreateRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        if !self.has_body() {
            v.fail(
                ValidationCode::BaseTypeRequired,
                "Cannot send an empty message: content, embeds, sticker_ids, components or attachments is required.",
            );
        }

        v.length_opt("content", self.content.as_deref(), 0, MAX_CONTENT_LENGTH);
        validate_embeds(v, self.embeds.as_deref(), MAX_EMBEDS);
        v.nested_opt("allowed_mentions", self.allowed_mentions.as_ref());
        v.items_opt("sticker_ids", self.sticker_ids.as_deref(), 0, MAX_STICKERS);
        validate_rows(v, "components", self.components.as_deref());
        v.items_opt("attachments", self.attachments.as_deref(), 0, MAX_ATTACHMENTS);
        v.each_opt("attachments", self.attachments.as_deref());
        v.nested_opt("nonce", self.nonce.as_ref());
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct MessageEditRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 4000)]
    pub content: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 10)]
    pub embeds: Option<Option<Vec<RichEmbed>>>,
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
    pub allowed_mentions: Option<Option<MessageAllowedMentionsRequest>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 5)]
    pub components: Option<Option<Vec<MessageComponent>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 10)]
    pub attachments: Option<Option<Vec<MessageAttachmentRequest>>>,
}

impl Validate for MessageEditRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt(
            "content",
            self.content.as_ref().and_then(|c| c.as_deref()),
            0,
            MAX_CONTENT_LENGTH,
        );
        validate_embeds(
            v,
            self.embeds.as_ref().and_then(|e| e.as_deref()),
            MAX_EMBEDS,
        );
        v.nested_opt(
            "allowed_mentions",
            self.allowed_mentions.as_ref().and_then(Option::as_ref),
        );
        validate_rows(
            v,
            "components",
            self.components.as_ref().and_then(|c| c.as_deref()),
        );

        let attachments = self.attachments.as_ref().and_then(|a| a.as_deref());
        v.items_opt("attachments", attachments, 0, MAX_ATTACHMENTS);
        v.each_opt("attachments", attachments);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BulkDeleteMessagesRequest {
    #[schema(min_items = 2, max_items = 100)]
    pub messages: Vec<Snowflake>,
}

impl Validate for BulkDeleteMessagesRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.items("messages", &self.messages, 2, 100);
    }
}
