//! Registry of every named schema.
//!
//! Each entry pairs a schema name, as it appears under `components.schemas` and in route
//! descriptors, with a validator for JSON payloads and a collector for its OpenAPI components.
//! Lookup is by exact, case-sensitive name.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::openapi::schema::Schema;
use utoipa::openapi::RefOr;
use utoipa::ToSchema;

use crate::error::{ErrorDetails, SchemaError};
use crate::route::SchemaRef;
use crate::validate::Validate;

type Components = Vec<(String, RefOr<Schema>)>;

/// One named schema.
pub struct SchemaEntry {
    pub name: &'static str,
    /// Whether bounds beyond shape are checked for this schema.
    pub constrained: bool,
    validator: fn(&Value) -> Result<(), SchemaError>,
    collector: fn(&mut Components),
}

impl SchemaEntry {
    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        (self.validator)(value)
    }

    /// Appends this schema and every schema it references.
    pub fn collect(&self, components: &mut Components) {
        (self.collector)(components)
    }
}

fn validate_checked<T: DeserializeOwned + Validate>(value: &Value) -> Result<(), SchemaError> {
    let parsed: T = serde_path_to_error::deserialize(value)?;
    parsed.validate().map_err(SchemaError::Constraints)
}

fn validate_shape<T: DeserializeOwned>(value: &Value) -> Result<(), SchemaError> {
    serde_path_to_error::deserialize::<_, T>(value)?;
    Ok(())
}

fn collect<T: ToSchema>(components: &mut Components) {
    components.push((T::name().into_owned(), T::schema()));
    T::schemas(components);
}

macro_rules! checked {
    ($module:ident :: $ty:ident) => {
        SchemaEntry {
            name: stringify!($ty),
            constrained: true,
            validator: validate_checked::<crate::$module::$ty>,
            collector: collect::<crate::$module::$ty>,
        }
    };
}

macro_rules! shaped {
    ($module:ident :: $ty:ident) => {
        SchemaEntry {
            name: stringify!($ty),
            constrained: false,
            validator: validate_shape::<crate::$module::$ty>,
            collector: collect::<crate::$module::$ty>,
        }
    };
}

static ENTRIES: &[SchemaEntry] = &[
    SchemaEntry {
        name: "SnowflakeType",
        constrained: false,
        validator: validate_shape::<crate::snowflake::Snowflake>,
        collector: collect::<crate::snowflake::Snowflake>,
    },
    // errors
    shaped!(error::ErrorResponse),
    shaped!(error::RatelimitedResponse),
    shaped!(error::ErrorDetails),
    shaped!(error::FieldError),
    // users
    shaped!(user::PremiumTypes),
    shaped!(user::UserAvatarDecorationResponse),
    shaped!(user::UserResponse),
    shaped!(user::UserPIIResponse),
    checked!(user::BotAccountPatchRequest),
    checked!(user::CreatePrivateChannelRequest),
    // guilds
    shaped!(guild::VerificationLevels),
    shaped!(guild::GuildExplicitContentFilterTypes),
    shaped!(guild::UserNotificationSettings),
    shaped!(guild::GuildMFALevel),
    shaped!(guild::GuildNSFWContentLevel),
    shaped!(guild::PremiumGuildTiers),
    shaped!(guild::AfkTimeouts),
    shaped!(guild::GuildRoleTagsResponse),
    shaped!(guild::GuildRoleResponse),
    shaped!(guild::GuildResponse),
    shaped!(guild::MyGuildResponse),
    shaped!(guild::GuildMemberResponse),
    shaped!(guild::GuildBanResponse),
    checked!(guild::GuildPatchRequest),
    checked!(guild::CreateRoleRequest),
    checked!(guild::UpdateRoleRequest),
    checked!(guild::UpdateGuildMemberRequest),
    checked!(guild::BanUserFromGuildRequest),
    // emojis and stickers
    shaped!(emoji::EmojiResponse),
    checked!(emoji::CreateGuildEmojiRequest),
    checked!(emoji::UpdateGuildEmojiRequest),
    shaped!(sticker::StickerTypes),
    shaped!(sticker::StickerFormatTypes),
    shaped!(sticker::GuildStickerResponse),
    shaped!(sticker::StandardStickerResponse),
    shaped!(sticker::StickerResponse),
    shaped!(sticker::StickerPackResponse),
    shaped!(sticker::StickerPackCollectionResponse),
    checked!(sticker::CreateGuildStickerRequest),
    checked!(sticker::UpdateGuildStickerRequest),
    // channels and threads
    shaped!(channel::ChannelTypes),
    shaped!(channel::ChannelPermissionOverwrites),
    shaped!(channel::VideoQualityModes),
    shaped!(channel::ThreadAutoArchiveDuration),
    shaped!(channel::ThreadSortOrder),
    shaped!(channel::ForumLayout),
    shaped!(channel::ChannelPermissionOverwriteResponse),
    shaped!(channel::ForumTagResponse),
    shaped!(channel::GuildChannelResponse),
    shaped!(channel::PrivateChannelResponse),
    shaped!(channel::PrivateGroupChannelResponse),
    shaped!(channel::ThreadMetadataResponse),
    shaped!(channel::ThreadMemberResponse),
    shaped!(channel::ThreadResponse),
    shaped!(channel::ChannelResponse),
    shaped!(channel::ThreadsResponse),
    checked!(channel::ChannelPermissionOverwriteRequest),
    checked!(channel::CreateGuildChannelRequest),
    checked!(channel::UpdateChannelRequest),
    checked!(channel::CreateThreadRequest),
    checked!(channel::CreateThreadFromMessageRequest),
    shaped!(channel::FollowChannelRequest),
    shaped!(channel::FollowedChannelResponse),
    // embeds
    checked!(embed::RichEmbedAuthor),
    checked!(embed::RichEmbedMedia),
    checked!(embed::RichEmbedFooter),
    checked!(embed::RichEmbedField),
    checked!(embed::RichEmbedProvider),
    checked!(embed::RichEmbed),
    shaped!(embed::MessageEmbedFieldResponse),
    shaped!(embed::MessageEmbedAuthorResponse),
    shaped!(embed::MessageEmbedImageResponse),
    shaped!(embed::MessageEmbedVideoResponse),
    shaped!(embed::MessageEmbedFooterResponse),
    shaped!(embed::MessageEmbedProviderResponse),
    shaped!(embed::MessageEmbedResponse),
    // components
    shaped!(component::MessageComponentTypes),
    shaped!(component::ButtonStyleTypes),
    shaped!(component::TextStyleTypes),
    shaped!(component::SnowflakeSelectDefaultValueTypes),
    checked!(component::ComponentEmoji),
    shaped!(component::SelectDefaultValue),
    checked!(component::ActionRowComponent),
    checked!(component::ButtonComponent),
    checked!(component::SelectOption),
    checked!(component::StringSelectComponent),
    checked!(component::TextInputComponent),
    checked!(component::SnowflakeSelectComponent),
    checked!(component::UserSelectComponent),
    checked!(component::RoleSelectComponent),
    checked!(component::MentionableSelectComponent),
    checked!(component::ChannelSelectComponent),
    checked!(component::MessageComponent),
    // messages
    shaped!(message::MessageType),
    shaped!(message::MessageReferenceType),
    shaped!(message::ReactionTypes),
    shaped!(message::AllowedMentionTypes),
    checked!(message::MessageNonce),
    shaped!(message::MessageAttachmentResponse),
    shaped!(message::MessageReactionCountDetailsResponse),
    shaped!(message::MessageReactionEmojiResponse),
    shaped!(message::MessageReactionResponse),
    shaped!(message::MessageMentionChannelResponse),
    shaped!(message::MessageReferenceResponse),
    shaped!(message::MessageStickerItemResponse),
    shaped!(message::MessageInteractionResponse),
    shaped!(message::BasicMessageResponse),
    shaped!(message::MessageResponse),
    checked!(message::MessageAllowedMentionsRequest),
    shaped!(message::MessageReferenceRequest),
    shaped!(message::AttachmentId),
    checked!(message::MessageAttachmentRequest),
    checked!(message::MessageCreateRequest),
    checked!(message::MessageEditRequest),
    checked!(message::BulkDeleteMessagesRequest),
    // interactions
    shaped!(interaction::InteractionTypes),
    shaped!(interaction::InteractionCallbackTypes),
    shaped!(interaction::InteractionContextType),
    shaped!(interaction::ApplicationIntegrationType),
    checked!(interaction::InteractionMessageCallbackData),
    shaped!(interaction::PongInteractionCallbackRequest),
    shaped!(interaction::CreateMessageInteractionCallbackRequest),
    shaped!(interaction::UpdateMessageInteractionCallbackRequest),
    checked!(interaction::InteractionAutocompleteCallbackData),
    shaped!(interaction::ApplicationCommandAutocompleteCallbackRequest),
    checked!(interaction::ModalInteractionCallbackData),
    shaped!(interaction::ModalInteractionCallbackRequest),
    shaped!(interaction::LaunchActivityInteractionCallbackRequest),
    checked!(interaction::InteractionCallbackRequest),
    // applications and commands
    shaped!(application::ApplicationOAuth2InstallParamsResponse),
    checked!(application::ApplicationOAuth2InstallParams),
    shaped!(application::ApplicationResponse),
    shaped!(application::PrivateApplicationResponse),
    checked!(application::UpdateApplicationRequest),
    shaped!(application_command::ApplicationCommandType),
    shaped!(application_command::ApplicationCommandOptionType),
    shaped!(application_command::OptionChoiceValue),
    checked!(application_command::ApplicationCommandOptionChoice),
    checked!(application_command::ApplicationCommandOption),
    checked!(application_command::ApplicationCommandCreateRequest),
    checked!(application_command::ApplicationCommandUpdateRequest),
    checked!(application_command::ApplicationCommandPatchRequest),
    shaped!(application_command::ApplicationCommandResponse),
    // webhooks
    shaped!(webhook::WebhookTypes),
    shaped!(webhook::WebhookSourceGuildResponse),
    shaped!(webhook::WebhookSourceChannelResponse),
    shaped!(webhook::GuildIncomingWebhookResponse),
    shaped!(webhook::ChannelFollowerWebhookResponse),
    shaped!(webhook::ApplicationIncomingWebhookResponse),
    shaped!(webhook::WebhookResponse),
    checked!(webhook::CreateWebhookRequest),
    checked!(webhook::UpdateWebhookRequest),
    checked!(webhook::IncomingWebhookRequest),
    checked!(webhook::IncomingWebhookUpdateRequest),
    // invites
    shaped!(invite::InviteTypes),
    shaped!(invite::InviteTargetTypes),
    shaped!(invite::InviteGuildResponse),
    shaped!(invite::InviteChannelResponse),
    shaped!(invite::InviteResponse),
    checked!(invite::CreateChannelInviteRequest),
    // gateway, oauth2 and voice
    shaped!(gateway::GatewayResponse),
    shaped!(gateway::GatewayBotSessionStartLimitResponse),
    shaped!(gateway::GatewayBotResponse),
    shaped!(oauth2::OAuth2Scopes),
    shaped!(oauth2::OAuth2GetAuthorizationResponse),
    shaped!(voice::VoiceRegionResponse),
];

pub fn entries() -> &'static [SchemaEntry] {
    ENTRIES
}

pub fn get(name: &str) -> Option<&'static SchemaEntry> {
    ENTRIES.iter().find(|entry| entry.name == name)
}

pub fn contains(name: &str) -> bool {
    get(name).is_some()
}

/// Every registered name, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = ENTRIES.iter().map(|entry| entry.name).collect();
    names.sort_unstable();
    names
}

/// Checks `value` against the schema registered as `name`.
///
/// # Returns
/// - `Ok(())` - The payload conforms
/// - `Err(SchemaError::UnknownSchema)` - No schema has this name
/// - `Err(SchemaError::Shape)` - The payload does not deserialize into the schema
/// - `Err(SchemaError::Constraints)` - The payload breaks declared bounds
pub fn validate_json(name: &str, value: &Value) -> Result<(), SchemaError> {
    let entry = get(name).ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;
    entry.validate(value)
}

/// Checks a body against a route's schema reference, reporting list items under their index.
pub fn validate_ref(schema: SchemaRef, value: &Value) -> Result<(), ErrorDetails> {
    let name = schema.name();
    if !schema.is_list() {
        return validate_json(name, value).map_err(|err| err.details());
    }

    let Some(items) = value.as_array() else {
        let err = SchemaError::shape(format!("expected a list of {}", name));
        return Err(err.details());
    };

    let mut details = ErrorDetails::default();
    for (index, item) in items.iter().enumerate() {
        if let Err(err) = validate_json(name, item) {
            details.merge_at(&index.to_string(), err.details());
        }
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(details)
    }
}

/// The OpenAPI components of every registered schema, keyed by name.
pub fn components() -> BTreeMap<String, RefOr<Schema>> {
    let mut components = Components::new();
    for entry in ENTRIES {
        entry.collect(&mut components);
    }

    components.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that names are unique and match the schema each entry collects.
    ///
    /// Expected: no duplicates, first collected component named like its entry
    #[test]
    fn names_are_unique_and_consistent() {
        let names = names();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());

        for entry in entries() {
            let mut components = Components::new();
            entry.collect(&mut components);
            assert_eq!(components[0].0, entry.name);
        }
    }

    /// Tests that every `$ref` in the collected components resolves.
    ///
    /// Expected: each referenced schema name is present in `components()`
    #[test]
    fn component_refs_resolve() {
        let components = components();
        let rendered = serde_json::to_string(&components).unwrap();

        for reference in rendered.split("\"$ref\":\"#/components/schemas/").skip(1) {
            let name = &reference[..reference.find('"').unwrap()];
            assert!(components.contains_key(name), "unresolved $ref {name}");
        }
    }

    /// Tests that lookup is case-sensitive.
    ///
    /// Expected: exact name found, different case rejected as unknown
    #[test]
    fn lookup_is_case_sensitive() {
        assert!(contains("UserResponse"));
        assert!(!contains("userresponse"));
        assert!(matches!(
            validate_json("userResponse", &json!({})),
            Err(SchemaError::UnknownSchema(_))
        ));
    }

    /// Tests the three failure kinds of `validate_json`.
    ///
    /// Expected: Shape for a wrong type, Constraints for a long name, Ok otherwise
    #[test]
    fn validate_json_reports_shape_and_constraints() {
        let ok = json!({ "name": "ping", "description": "Replies with pong" });
        assert!(validate_json("ApplicationCommandCreateRequest", &ok).is_ok());

        let shape = json!({ "name": 5 });
        assert!(matches!(
            validate_json("ApplicationCommandCreateRequest", &shape),
            Err(SchemaError::Shape { .. })
        ));

        let long = json!({ "name": "x".repeat(33), "description": "d" });
        let Err(SchemaError::Constraints(details)) =
            validate_json("ApplicationCommandCreateRequest", &long)
        else {
            panic!("expected constraint failure");
        };
        assert_eq!(details.codes_at(&["name"]), vec!["BASE_TYPE_BAD_LENGTH"]);
    }

    /// Tests list bodies.
    ///
    /// Expected: failing items reported under their index, non-arrays rejected at the root
    #[test]
    fn validate_ref_indexes_list_items() {
        let body = json!([
            { "name": "ok", "description": "fine" },
            { "name": "x".repeat(33), "description": "too long" }
        ]);

        let details =
            validate_ref(SchemaRef::List("ApplicationCommandUpdateRequest"), &body).unwrap_err();
        assert!(details.get(&["0"]).is_none());
        assert_eq!(details.codes_at(&["1", "name"]), vec!["BASE_TYPE_BAD_LENGTH"]);

        let details =
            validate_ref(SchemaRef::List("ApplicationCommandUpdateRequest"), &json!({}))
                .unwrap_err();
        assert_eq!(details.codes_at(&[]), vec!["BASE_TYPE_INVALID"]);
    }

    /// Tests that shape failures are reported at the offending field.
    ///
    /// Expected: wrong type under `embeds.0.title`, missing keys under their own name
    #[test]
    fn shape_failures_keep_field_path() {
        let wrong_type = json!({ "content": "hi", "embeds": [{ "title": 5 }] });
        let details = validate_json("MessageCreateRequest", &wrong_type)
            .unwrap_err()
            .details();
        assert!(details.errors.is_empty());
        assert_eq!(
            details.codes_at(&["embeds", "0", "title"]),
            vec!["BASE_TYPE_INVALID"]
        );

        let missing_nested = json!({ "content": "hi", "embeds": [{ "fields": [{ "name": "a" }] }] });
        let details = validate_json("MessageCreateRequest", &missing_nested)
            .unwrap_err()
            .details();
        assert_eq!(
            details.codes_at(&["embeds", "0", "fields", "0", "value"]),
            vec!["BASE_TYPE_REQUIRED"]
        );

        let missing_root = json!({ "description": "Replies with pong" });
        let details = validate_json("ApplicationCommandCreateRequest", &missing_root)
            .unwrap_err()
            .details();
        assert_eq!(details.codes_at(&["name"]), vec!["BASE_TYPE_REQUIRED"]);
    }

    /// Tests shape failures inside nested component unions.
    ///
    /// Expected: an undeclared button style and a missing select key reported below the row
    #[test]
    fn shape_failures_inside_unions_keep_field_path() {
        let bad_style = json!({
            "components": [{ "type": 1, "components": [
                { "type": 2, "style": 9, "custom_id": "x", "label": "y" }
            ] }]
        });
        let details = validate_json("MessageCreateRequest", &bad_style)
            .unwrap_err()
            .details();
        assert_eq!(
            details.codes_at(&["components", "0", "components", "0", "style"]),
            vec!["BASE_TYPE_INVALID"]
        );

        let missing_options = json!({
            "components": [{ "type": 1, "components": [{ "type": 3, "custom_id": "pick" }] }]
        });
        let details = validate_json("MessageCreateRequest", &missing_options)
            .unwrap_err()
            .details();
        assert_eq!(
            details.codes_at(&["components", "0", "components", "0", "options"]),
            vec!["BASE_TYPE_REQUIRED"]
        );
    }
}
