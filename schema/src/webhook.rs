//! Webhook schemas.
//!
//! Incoming webhooks, channel follower webhooks and application webhooks share most fields but
//! differ in what they expose (only incoming webhooks carry a token and URL), so
//! [`WebhookResponse`] is a union discriminated by `type`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::component::{validate_rows, MessageComponent};
use crate::embed::{validate_embeds, RichEmbed};
use crate::message::{MessageAllowedMentionsRequest, MessageAttachmentRequest};
use crate::snowflake::Snowflake;
use crate::user::UserResponse;
use crate::validate::{Validate, ValidationCode, Validator};

pub const MAX_NAME_LENGTH: usize = 80;
pub const MAX_CONTENT_LENGTH: usize = 2000;

int_enum! {
    pub enum WebhookTypes: u8 {
        GuildIncoming = 1,
        ChannelFollower = 2,
        ApplicationIncoming = 3,
    }
}

/// Names containing "clyde" or "discord", or equal to "everyone"/"here", are refused.
fn check_name(v: &mut Validator<'_>, field: &str, name: &str) {
    v.length(field, name, 1, MAX_NAME_LENGTH);

    let lower = name.to_lowercase();
    let reserved = lower.contains("clyde") || lower.contains("discord");
    if reserved || lower == "everyone" || lower == "here" {
        v.fail_field(
            field,
            ValidationCode::BaseTypeInvalid,
            format!("Webhook names cannot be '{}'.", name),
        );
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WebhookSourceGuildResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WebhookSourceChannelResponse {
    pub id: Snowflake,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildIncomingWebhookResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: WebhookTypes,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub avatar: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub channel_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub guild_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub application_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    /// Omitted when the caller does not own the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelFollowerWebhookResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: WebhookTypes,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub avatar: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub channel_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub guild_id: Option<Snowflake>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub application_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_guild: Option<WebhookSourceGuildResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_channel: Option<WebhookSourceChannelResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationIncomingWebhookResponse {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: WebhookTypes,
    pub name: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub avatar: Option<String>,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub application_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

tagged_union! {
    pub enum WebhookResponse by WebhookTypes {
        GuildIncoming(GuildIncomingWebhookResponse) = [GuildIncoming],
        ChannelFollower(ChannelFollowerWebhookResponse) = [ChannelFollower],
        ApplicationIncoming(ApplicationIncomingWebhookResponse) = [ApplicationIncoming],
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateWebhookRequest {
    #[schema(min_length = 1, max_length = 80)]
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub avatar: Option<Option<String>>,
}

impl Validate for CreateWebhookRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        check_name(v, "name", &self.name);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateWebhookRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 1, max_length = 80)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub avatar: Option<Option<String>>,
    /// Moves the webhook; not accepted when authenticating with the webhook token.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    pub channel_id: Option<Snowflake>,
}

impl Validate for UpdateWebhookRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        if let Some(name) = &self.name {
            check_name(v, "name", name);
        }
    }
}

/// Message posted through a webhook token.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct IncomingWebhookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2000)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 1, max_length = 80)]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 10)]
    pub embeds: Option<Vec<RichEmbed>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<MessageAllowedMentionsRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 5)]
    pub components: Option<Vec<MessageComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 10)]
    pub attachments: Option<Vec<MessageAttachmentRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    /// Creates a forum thread with this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 100)]
    pub thread_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 5)]
    pub applied_tags: Option<Vec<Snowflake>>,
}

impl Validate for IncomingWebhookRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        let has_body = self.content.as_deref().is_some_and(|c| !c.is_empty())
            || self.embeds.as_ref().is_some_and(|e| !e.is_empty())
            || self.components.as_ref().is_some_and(|c| !c.is_empty())
            || self.attachments.as_ref().is_some_and(|a| !a.is_empty());
        if !has_body {
            v.fail(
                ValidationCode::BaseTypeRequired,
                "Cannot send an empty message: content, embeds, components or attachments is required.",
            );
        }

        v.length_opt("content", self.content.as_deref(), 0, MAX_CONTENT_LENGTH);
        if let Some(username) = &self.username {
            check_name(v, "username", username);
        }
        v.length_opt("avatar_url", self.avatar_url.as_deref(), 0, 2048);
        validate_embeds(v, self.embeds.as_deref(), 10);
        v.nested_opt("allowed_mentions", self.allowed_mentions.as_ref());
        validate_rows(v, "components", self.components.as_deref());
        v.items_opt("attachments", self.attachments.as_deref(), 0, 10);
        v.each_opt("attachments", self.attachments.as_deref());
        v.length_opt("thread_name", self.thread_name.as_deref(), 0, 100);
        v.items_opt("applied_tags", self.applied_tags.as_deref(), 0, 5);
    }
}

/// Edit of a message previously sent through a webhook token.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct IncomingWebhookUpdateRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 2000)]
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
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub flags: Option<Option<i64>>,
}

impl Validate for IncomingWebhookUpdateRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt(
            "content",
            self.content.as_ref().and_then(|c| c.as_deref()),
            0,
            MAX_CONTENT_LENGTH,
        );
        validate_embeds(v, self.embeds.as_ref().and_then(|e| e.as_deref()), 10);
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
        v.items_opt("attachments", attachments, 0, 10);
        v.each_opt("attachments", attachments);
    }
}
