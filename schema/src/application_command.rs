//! Application (slash, user and message) command schemas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::channel::ChannelTypes;
use crate::interaction::{ApplicationIntegrationType, InteractionContextType};
use crate::snowflake::Snowflake;
use crate::validate::{Validate, ValidationCode, Validator};

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_DESCRIPTION_LENGTH: usize = 100;
pub const MAX_OPTIONS: usize = 25;
pub const MAX_CHOICES: usize = 25;

int_enum! {
    pub enum ApplicationCommandType: u8 {
        ChatInput = 1,
        User = 2,
        Message = 3,
        PrimaryEntryPoint = 4,
    }
}

int_enum! {
    pub enum ApplicationCommandOptionType: u8 {
        SubCommand = 1,
        SubCommandGroup = 2,
        String = 3,
        Integer = 4,
        Boolean = 5,
        User = 6,
        Channel = 7,
        Role = 8,
        Mentionable = 9,
        Number = 10,
        Attachment = 11,
    }
}

impl ApplicationCommandOptionType {
    /// Whether options of this type may declare fixed choices.
    pub fn accepts_choices(self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Number)
    }

    pub fn is_subcommand(self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }
}

/// Value of a fixed choice; its JSON type must match the option type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum OptionChoiceValue {
    Integer(i64),
    Number(f64),
    String(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationCommandOptionChoice {
    #[schema(min_length = 1, max_length = 100)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<BTreeMap<String, String>>,
    pub value: OptionChoiceValue,
}

impl Validate for ApplicationCommandOptionChoice {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 1, 100);
        if let OptionChoiceValue::String(value) = &self.value {
            v.length("value", value, 0, 100);
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationCommandOption {
    #[serde(rename = "type")]
    pub kind: ApplicationCommandOptionType,
    #[schema(min_length = 1, max_length = 32)]
    pub name: String,
    #[schema(min_length = 1, max_length = 100)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 25)]
    pub choices: Option<Vec<ApplicationCommandOptionChoice>>,
    /// Nested options of a subcommand or subcommand group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion, max_items = 25)]
    pub options: Option<Vec<ApplicationCommandOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelTypes>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 6000)]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 6000)]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
}

impl ApplicationCommandOption {
    fn choice_matches(&self, value: &OptionChoiceValue) -> bool {
        match (self.kind, value) {
            (ApplicationCommandOptionType::String, OptionChoiceValue::String(_)) => true,
            (ApplicationCommandOptionType::Integer, OptionChoiceValue::Integer(_)) => true,
            (ApplicationCommandOptionType::Number, OptionChoiceValue::Integer(_)) => true,
            (ApplicationCommandOptionType::Number, OptionChoiceValue::Number(_)) => true,
            _ => false,
        }
    }
}

impl Validate for ApplicationCommandOption {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 1, MAX_NAME_LENGTH);
        v.length("description", &self.description, 1, MAX_DESCRIPTION_LENGTH);
        v.range_opt("min_length", self.min_length, 0, 6000);
        v.range_opt("max_length", self.max_length, 1, 6000);

        if let Some(choices) = &self.choices {
            if !self.kind.accepts_choices() {
                v.fail_field(
                    "choices",
                    ValidationCode::BaseTypeInvalid,
                    "Choices are only allowed on string, integer and number options.",
                );
            }
            v.items("choices", choices, 0, MAX_CHOICES);
            v.each("choices", choices);

            if self.kind.accepts_choices() {
                let mut list = v.field("choices");
                for (i, choice) in choices.iter().enumerate() {
                    if !self.choice_matches(&choice.value) {
                        list.index(i).fail_field(
                            "value",
                            ValidationCode::BaseTypeInvalid,
                            "Choice value does not match the option type.",
                        );
                    }
                }
            }
        }

        if self.options.is_some() && !self.kind.is_subcommand() {
            v.fail_field(
                "options",
                ValidationCode::BaseTypeInvalid,
                "Only subcommands and subcommand groups can have nested options.",
            );
        }
        validate_options(v, self.options.as_deref());
    }
}

/// Checks an option list: count, each option, and that required options come first.
fn validate_options(v: &mut Validator<'_>, options: Option<&[ApplicationCommandOption]>) {
    let Some(options) = options else {
        return;
    };

    v.items("options", options, 0, MAX_OPTIONS);
    v.each("options", options);

    let mut seen_optional = false;
    let mut list = v.field("options");
    for (i, option) in options.iter().enumerate() {
        let required = option.required.unwrap_or(false);
        if required && seen_optional {
            list.index(i).fail_field(
                "required",
                ValidationCode::BaseTypeInvalid,
                "Required options must be placed before non-required options.",
            );
        }
        seen_optional |= !required;
    }
}

/// Description rules depend on the command type: chat input commands need one.
fn validate_description(
    v: &mut Validator<'_>,
    kind: Option<ApplicationCommandType>,
    description: Option<&str>,
) {
    let chat_input = kind.unwrap_or(ApplicationCommandType::ChatInput)
        == ApplicationCommandType::ChatInput;

    match description {
        Some(description) if chat_input => {
            v.length("description", description, 1, MAX_DESCRIPTION_LENGTH)
        }
        Some(description) => v.length("description", description, 0, MAX_DESCRIPTION_LENGTH),
        None if chat_input => v.required("description"),
        None => {}
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct ApplicationCommandCreateRequest {
    #[schema(min_length = 1, max_length = 32)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 100)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 25)]
    pub options: Option<Vec<ApplicationCommandOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<InteractionContextType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<ApplicationIntegrationType>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ApplicationCommandType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

impl Validate for ApplicationCommandCreateRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 1, MAX_NAME_LENGTH);
        validate_description(v, self.kind, self.description.as_deref());
        if let Some(permissions) = &self.default_member_permissions {
            v.bitfield("default_member_permissions", permissions);
        }
        validate_options(v, self.options.as_deref());
    }
}

/// One entry of a bulk overwrite; an `id` updates that command in place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationCommandUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(flatten)]
    pub command: ApplicationCommandCreateRequest,
}

impl Validate for ApplicationCommandUpdateRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        self.command.validate_with(v);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct ApplicationCommandPatchRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::non_null::deserialize"
    )]
    #[schema(min_length = 1, max_length = 32)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub name_localizations: Option<Option<BTreeMap<String, String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_length = 100)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub description_localizations: Option<Option<BTreeMap<String, String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    #[schema(max_items = 25)]
    pub options: Option<Option<Vec<ApplicationCommandOption>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub default_member_permissions: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub dm_permission: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub contexts: Option<Option<Vec<InteractionContextType>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub integration_types: Option<Option<Vec<ApplicationIntegrationType>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::presence::patch"
    )]
    pub nsfw: Option<Option<bool>>,
}

impl Validate for ApplicationCommandPatchRequest {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 1, MAX_NAME_LENGTH);
        v.length_opt(
            "description",
            self.description.as_ref().and_then(|d| d.as_deref()),
            0,
            MAX_DESCRIPTION_LENGTH,
        );
        if let Some(Some(permissions)) = &self.default_member_permissions {
            v.bitfield("default_member_permissions", permissions);
        }
        validate_options(v, self.options.as_ref().and_then(|o| o.as_deref()));
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ApplicationCommandResponse {
    pub id: Snowflake,
    pub application_id: Snowflake,
    /// Auto-incrementing version, bumped on every substantive update.
    pub version: Snowflake,
    #[serde(rename = "type")]
    pub kind: ApplicationCommandType,
    pub name: String,
    pub description: String,
    #[serde(with = "crate::presence::nullable")]
    #[schema(required = true)]
    pub default_member_permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<InteractionContextType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<ApplicationIntegrationType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests the command name bound.
    ///
    /// Expected: 32 characters accepted, 33 rejected with BASE_TYPE_BAD_LENGTH at `name`
    #[test]
    fn command_name_is_one_to_thirty_two() {
        let ok: ApplicationCommandCreateRequest = serde_json::from_value(json!({
            "name": "n".repeat(32),
            "description": "ok"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let long: ApplicationCommandCreateRequest = serde_json::from_value(json!({
            "name": "n".repeat(33),
            "description": "ok"
        }))
        .unwrap();
        let details = long.validate().unwrap_err();
        assert_eq!(details.codes_at(&["name"]), vec!["BASE_TYPE_BAD_LENGTH"]);
    }

    /// Tests that chat input commands need a description but context menu commands do not.
    ///
    /// Expected: Err for a chat input command without description, Ok for a user command
    #[test]
    fn description_required_for_chat_input() {
        let chat: ApplicationCommandCreateRequest =
            serde_json::from_value(json!({ "name": "ping" })).unwrap();
        let details = chat.validate().unwrap_err();
        assert_eq!(details.codes_at(&["description"]), vec!["BASE_TYPE_REQUIRED"]);

        let user: ApplicationCommandCreateRequest =
            serde_json::from_value(json!({ "name": "High Five", "type": 2 })).unwrap();
        assert!(user.validate().is_ok());
    }

    /// Tests that choices are rejected on option types that cannot have them.
    ///
    /// Expected: Err with BASE_TYPE_INVALID at `options.0.choices`
    #[test]
    fn choices_only_on_scalar_options() {
        let request: ApplicationCommandCreateRequest = serde_json::from_value(json!({
            "name": "pick",
            "description": "Pick a user",
            "options": [{
                "type": 6,
                "name": "who",
                "description": "Target",
                "choices": [{ "name": "me", "value": "me" }]
            }]
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["options", "0", "choices"]),
            vec!["BASE_TYPE_INVALID"]
        );
    }

    /// Tests that choice values must match the option type.
    ///
    /// Expected: Err at `options.0.choices.1.value` for a string choice on an integer option
    #[test]
    fn choice_values_match_option_type() {
        let request: ApplicationCommandCreateRequest = serde_json::from_value(json!({
            "name": "roll",
            "description": "Roll dice",
            "options": [{
                "type": 4,
                "name": "sides",
                "description": "Sides",
                "choices": [
                    { "name": "six", "value": 6 },
                    { "name": "twenty", "value": "20" }
                ]
            }]
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["options", "0", "choices", "1", "value"]),
            vec!["BASE_TYPE_INVALID"]
        );
    }

    /// Tests the ordering rule for required options.
    ///
    /// Expected: Err at `options.1.required`
    #[test]
    fn required_options_come_first() {
        let request: ApplicationCommandCreateRequest = serde_json::from_value(json!({
            "name": "ban",
            "description": "Ban a member",
            "options": [
                { "type": 3, "name": "reason", "description": "Why" },
                { "type": 6, "name": "user", "description": "Who", "required": true }
            ]
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["options", "1", "required"]),
            vec!["BASE_TYPE_INVALID"]
        );
    }

    /// Tests validation of nested subcommand options.
    ///
    /// Expected: Err at `options.0.options.0.name`
    #[test]
    fn validates_nested_subcommand_options() {
        let request: ApplicationCommandCreateRequest = serde_json::from_value(json!({
            "name": "config",
            "description": "Configure",
            "options": [{
                "type": 1,
                "name": "set",
                "description": "Set a value",
                "options": [{ "type": 3, "name": "", "description": "Key" }]
            }]
        }))
        .unwrap();

        let details = request.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["options", "0", "options", "0", "name"]),
            vec!["BASE_TYPE_BAD_LENGTH"]
        );
    }

    /// Tests that a bulk overwrite entry flattens the create body.
    ///
    /// Expected: Ok with `id` and `name` both populated
    #[test]
    fn update_request_flattens_command() {
        let request: ApplicationCommandUpdateRequest = serde_json::from_value(json!({
            "id": "123",
            "name": "ping",
            "description": "Replies with pong"
        }))
        .unwrap();

        assert_eq!(request.id, Some(Snowflake::new(123)));
        assert_eq!(request.command.name, "ping");
        assert!(request.validate().is_ok());
    }
}
