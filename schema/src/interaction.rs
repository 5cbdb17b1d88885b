//! Interaction callback bodies.
//!
//! A callback's `type` selects both what Discord does with the interaction and which `data`
//! shape it expects, so [`InteractionCallbackRequest`] is a union over one shape per group of
//! callback types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application_command::ApplicationCommandOptionChoice;
use crate::component::{validate_rows, MessageComponent};
use crate::embed::{validate_embeds, RichEmbed};
use crate::message::{MessageAllowedMentionsRequest, MessageAttachmentRequest};
use crate::validate::{Validate, Validator};

int_enum! {
    pub enum InteractionTypes: u8 {
        Ping = 1,
        ApplicationCommand = 2,
        MessageComponent = 3,
        ApplicationCommandAutocomplete = 4,
        ModalSubmit = 5,
    }
}

int_enum! {
    pub enum InteractionCallbackTypes: u8 {
        Pong = 1,
        ChannelMessageWithSource = 4,
        DeferredChannelMessageWithSource = 5,
        DeferredUpdateMessage = 6,
        UpdateMessage = 7,
        ApplicationCommandAutocompleteResult = 8,
        Modal = 9,
        PremiumRequired = 10,
        LaunchActivity = 12,
    }
}

int_enum! {
    /// Where an interaction may be triggered from.
    pub enum InteractionContextType: u8 {
        Guild = 0,
        BotDm = 1,
        PrivateChannel = 2,
    }
}

int_enum! {
    pub enum ApplicationIntegrationType: u8 {
        GuildInstall = 0,
        UserInstall = 1,
    }
}

/// Message content of a callback; also used for follow-up and original-response edits.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct InteractionMessageCallbackData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2000)]
    pub content: Option<String>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}

impl Validate for InteractionMessageCallbackData {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("content", self.content.as_deref(), 0, 2000);
        validate_embeds(v, self.embeds.as_deref(), 10);
        v.nested_opt("allowed_mentions", self.allowed_mentions.as_ref());
        validate_rows(v, "components", self.components.as_deref());
        v.items_opt("attachments", self.attachments.as_deref(), 0, 10);
        v.each_opt("attachments", self.attachments.as_deref());
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PongInteractionCallbackRequest {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackTypes,
}

/// Responds with a new message, or defers one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateMessageInteractionCallbackRequest {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionMessageCallbackData>,
}

/// Edits the message a component was attached to, or defers that edit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateMessageInteractionCallbackRequest {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionMessageCallbackData>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct InteractionAutocompleteCallbackData {
    #[schema(max_items = 25)]
    pub choices: Vec<ApplicationCommandOptionChoice>,
}

impl Validate for InteractionAutocompleteCallbackData {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.items("choices", &self.choices, 0, 25);
        v.each("choices", &self.choices);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationCommandAutocompleteCallbackRequest {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackTypes,
    pub data: InteractionAutocompleteCallbackData,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ModalInteractionCallbackData {
    #[schema(min_length = 1, max_length = 100)]
    pub custom_id: String,
    #[schema(min_length = 1, max_length = 45)]
    pub title: String,
    #[schema(min_items = 1, max_items = 5)]
    pub components: Vec<MessageComponent>,
}

impl Validate for ModalInteractionCallbackData {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("custom_id", &self.custom_id, 1, 100);
        v.length("title", &self.title, 1, 45);
        v.items("components", &self.components, 1, 5);
        validate_rows(v, "components", Some(&self.components));
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ModalInteractionCallbackRequest {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackTypes,
    pub data: ModalInteractionCallbackData,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LaunchActivityInteractionCallbackRequest {
    #[serde(rename = "type")]
    pub kind: InteractionCallbackTypes,
}

tagged_union! {
    pub enum InteractionCallbackRequest by InteractionCallbackTypes {
        Pong(PongInteractionCallbackRequest) = [Pong],
        CreateMessage(CreateMessageInteractionCallbackRequest) = [
            ChannelMessageWithSource,
            DeferredChannelMessageWithSource,
        ],
        UpdateMessage(UpdateMessageInteractionCallbackRequest) = [
            DeferredUpdateMessage,
            UpdateMessage,
        ],
        Autocomplete(ApplicationCommandAutocompleteCallbackRequest) = [
            ApplicationCommandAutocompleteResult,
        ],
        Modal(ModalInteractionCallbackRequest) = [Modal],
        LaunchActivity(LaunchActivityInteractionCallbackRequest) = [LaunchActivity],
    }
}

impl Validate for InteractionCallbackRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        match self {
            Self::Pong(_) | Self::LaunchActivity(_) => {}
            Self::CreateMessage(request) => v.nested_opt("data", request.data.as_ref()),
            Self::UpdateMessage(request) => v.nested_opt("data", request.data.as_ref()),
            Self::Autocomplete(request) => v.nested("data", &request.data),
            Self::Modal(request) => v.nested("data", &request.data),
        }
    }
}
