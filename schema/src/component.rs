//! Message components: action rows, buttons, selects and text inputs.
//!
//! The same shapes are used in request bodies and on returned messages. Top-level components
//! of a message or modal are action rows; rows hold the interactive components.

use std::borrow::Cow;
use std::ops::Deref;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::openapi::schema::{AllOfBuilder, ObjectBuilder, Schema, Type};
use utoipa::openapi::{Ref, RefOr};
use utoipa::{PartialSchema, ToSchema};

use crate::channel::ChannelTypes;
use crate::snowflake::Snowflake;
use crate::validate::{Validate, ValidationCode, Validator};

pub const MAX_ROW_CHILDREN: usize = 5;
pub const MAX_CUSTOM_ID_LENGTH: usize = 100;
pub const MAX_SELECT_OPTIONS: usize = 25;
pub const MAX_TEXT_INPUT_LENGTH: i64 = 4000;

int_enum! {
    pub enum MessageComponentTypes: u8 {
        ActionRow = 1,
        Button = 2,
        StringSelect = 3,
        TextInput = 4,
        UserSelect = 5,
        RoleSelect = 6,
        MentionableSelect = 7,
        ChannelSelect = 8,
    }
}

int_enum! {
    pub enum ButtonStyleTypes: u8 {
        Primary = 1,
        Secondary = 2,
        Success = 3,
        Danger = 4,
        Link = 5,
        Premium = 6,
    }
}

int_enum! {
    pub enum TextStyleTypes: u8 {
        Short = 1,
        Paragraph = 2,
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SnowflakeSelectDefaultValueTypes {
    User,
    Role,
    Channel,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct ComponentEmoji {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 32)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl Validate for ComponentEmoji {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 0, 32);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SelectDefaultValue {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: SnowflakeSelectDefaultValueTypes,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ActionRowComponent {
    #[serde(rename = "type")]
    pub kind: MessageComponentTypes,
    #[schema(no_recursion, min_items = 1, max_items = 5)]
    pub components: Vec<MessageComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Validate for ActionRowComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.items("components", &self.components, 1, MAX_ROW_CHILDREN);
        v.each("components", &self.components);

        let mut children = v.field("components");
        for (i, child) in self.components.iter().enumerate() {
            if matches!(child, MessageComponent::ActionRow(_)) {
                children.index(i).fail(
                    ValidationCode::BaseTypeInvalid,
                    "Action rows cannot contain other action rows.",
                );
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ButtonComponent {
    #[serde(rename = "type")]
    pub kind: MessageComponentTypes,
    pub style: ButtonStyleTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 1, max_length = 100)]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 80)]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 512)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Validate for ButtonComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("custom_id", self.custom_id.as_deref(), 1, MAX_CUSTOM_ID_LENGTH);
        v.length_opt("label", self.label.as_deref(), 0, 80);
        v.length_opt("url", self.url.as_deref(), 0, 512);
        v.nested_opt("emoji", self.emoji.as_ref());

        // Link buttons navigate, premium buttons open a store page, the rest send an interaction.
        match self.style {
            ButtonStyleTypes::Link => {
                if self.url.is_none() {
                    v.required("url");
                }
                if self.custom_id.is_some() {
                    v.fail_field(
                        "custom_id",
                        ValidationCode::BaseTypeInvalid,
                        "Link buttons cannot have a custom_id.",
                    );
                }
            }
            ButtonStyleTypes::Premium => {
                if self.sku_id.is_none() {
                    v.required("sku_id");
                }
            }
            _ => {
                if self.custom_id.is_none() {
                    v.required("custom_id");
                }
                if self.url.is_some() {
                    v.fail_field(
                        "url",
                        ValidationCode::BaseTypeInvalid,
                        "Only link buttons can have a url.",
                    );
                }
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SelectOption {
    #[schema(min_length = 1, max_length = 100)]
    pub label: String,
    #[schema(min_length = 1, max_length = 100)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 100)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ComponentEmoji>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

impl Validate for SelectOption {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("label", &self.label, 1, 100);
        v.length("value", &self.value, 1, 100);
        v.length_opt("description", self.description.as_deref(), 0, 100);
        v.nested_opt("emoji", self.emoji.as_ref());
    }
}

/// Bounds shared by every select menu.
fn validate_select(
    v: &mut Validator<'_>,
    custom_id: &str,
    placeholder: Option<&str>,
    min_values: Option<i64>,
    max_values: Option<i64>,
) {
    v.length("custom_id", custom_id, 1, MAX_CUSTOM_ID_LENGTH);
    v.length_opt("placeholder", placeholder, 0, 150);
    v.range_opt("min_values", min_values, 0, 25);
    v.range_opt("max_values", max_values, 1, 25);

    if let (Some(min), Some(max)) = (min_values, max_values) {
        if min > max {
            v.fail_field(
                "min_values",
                ValidationCode::BaseTypeInvalid,
                "min_values must not exceed max_values.",
            );
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StringSelectComponent {
    #[serde(rename = "type")]
    pub kind: MessageComponentTypes,
    #[schema(min_length = 1, max_length = 100)]
    pub custom_id: String,
    #[schema(min_items = 1, max_items = 25)]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 150)]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 25)]
    pub min_values: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 25)]
    pub max_values: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Validate for StringSelectComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        validate_select(
            v,
            &self.custom_id,
            self.placeholder.as_deref(),
            self.min_values,
            self.max_values,
        );
        v.items("options", &self.options, 1, MAX_SELECT_OPTIONS);
        v.each("options", &self.options);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TextInputComponent {
    #[serde(rename = "type")]
    pub kind: MessageComponentTypes,
    #[schema(min_length = 1, max_length = 100)]
    pub custom_id: String,
    pub style: TextStyleTypes,
    #[schema(min_length = 1, max_length = 45)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 4000)]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 4000)]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 4000)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 100)]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Validate for TextInputComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("custom_id", &self.custom_id, 1, MAX_CUSTOM_ID_LENGTH);
        v.length("label", &self.label, 1, 45);
        v.range_opt("min_length", self.min_length, 0, MAX_TEXT_INPUT_LENGTH);
        v.range_opt("max_length", self.max_length, 1, MAX_TEXT_INPUT_LENGTH);
        v.length_opt("value", self.value.as_deref(), 0, MAX_TEXT_INPUT_LENGTH as usize);
        v.length_opt("placeholder", self.placeholder.as_deref(), 0, 100);
    }
}

/// User, role and mentionable selects share one shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SnowflakeSelectComponent {
    #[serde(rename = "type")]
    pub kind: MessageComponentTypes,
    #[schema(min_length = 1, max_length = 100)]
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 150)]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 25)]
    pub min_values: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 25)]
    pub max_values: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 25)]
    pub default_values: Option<Vec<SelectDefaultValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Validate for SnowflakeSelectComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        validate_select(
            v,
            &self.custom_id,
            self.placeholder.as_deref(),
            self.min_values,
            self.max_values,
        );
        v.items_opt("default_values", self.default_values.as_deref(), 0, 25);

        let allowed: &[SnowflakeSelectDefaultValueTypes] = match self.kind {
            MessageComponentTypes::UserSelect => &[SnowflakeSelectDefaultValueTypes::User],
            MessageComponentTypes::RoleSelect => &[SnowflakeSelectDefaultValueTypes::Role],
            _ => &[
                SnowflakeSelectDefaultValueTypes::User,
                SnowflakeSelectDefaultValueTypes::Role,
            ],
        };
        let mut defaults = v.field("default_values");
        for (i, value) in self.default_values.iter().flatten().enumerate() {
            if !allowed.contains(&value.kind) {
                defaults.index(i).fail_field(
                    "type",
                    ValidationCode::BaseTypeChoices,
                    "Default value type does not match the select type.",
                );
            }
        }
    }
}

/// Declares a select over [`SnowflakeSelectComponent`] that accepts exactly one `type`.
macro_rules! snowflake_select {
    ($($(#[$meta:meta])* $name:ident = $kind:ident,)+) => {$(
        $(#[$meta])*
        #[derive(Serialize, Clone, Debug, PartialEq)]
        #[serde(transparent)]
        pub struct $name(pub SnowflakeSelectComponent);

        impl Deref for $name {
            type Target = SnowflakeSelectComponent;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let select = SnowflakeSelectComponent::deserialize(deserializer)?;
                if select.kind != MessageComponentTypes::$kind {
                    return Err(D::Error::custom(format!(
                        "type {} is not accepted by {}",
                        select.kind.value(),
                        stringify!($name)
                    )));
                }
                Ok(Self(select))
            }
        }

        impl Validate for $name {
            fn validate_with(&self, v: &mut Validator<'_>) {
                self.0.validate_with(v);
            }
        }

        impl PartialSchema for $name {
            fn schema() -> RefOr<Schema> {
                let kind = ObjectBuilder::new()
                    .schema_type(Type::Integer)
                    .enum_values(Some([MessageComponentTypes::$kind.value()]))
                    .build();
                let narrowed = ObjectBuilder::new()
                    .schema_type(Type::Object)
                    .property("type", RefOr::T(Schema::Object(kind)))
                    .required("type")
                    .build();

                let all_of = AllOfBuilder::new()
                    .item(RefOr::Ref(Ref::from_schema_name("SnowflakeSelectComponent")))
                    .item(RefOr::T(Schema::Object(narrowed)))
                    .build();

                RefOr::T(Schema::AllOf(all_of))
            }
        }

        impl ToSchema for $name {
            fn name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($name))
            }

            fn schemas(schemas: &mut Vec<(String, RefOr<Schema>)>) {
                schemas.push((
                    <SnowflakeSelectComponent as ToSchema>::name().into_owned(),
                    <SnowflakeSelectComponent as PartialSchema>::schema(),
                ));
                <SnowflakeSelectComponent as ToSchema>::schemas(schemas);
            }
        }
    )+};
}

snowflake_select! {
    /// Select whose options are the guild's users (`type` 5).
    UserSelectComponent = UserSelect,
    /// Select whose options are the guild's roles (`type` 6).
    RoleSelectComponent = RoleSelect,
    /// Select offering both users and roles (`type` 7).
    MentionableSelectComponent = MentionableSelect,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChannelSelectComponent {
    #[serde(rename = "type")]
    pub kind: MessageComponentTypes,
    #[schema(min_length = 1, max_length = 100)]
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 150)]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 25)]
    pub min_values: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 1, maximum = 25)]
    pub max_values: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 25)]
    pub default_values: Option<Vec<SelectDefaultValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelTypes>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Validate for ChannelSelectComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        validate_select(
            v,
            &self.custom_id,
            self.placeholder.as_deref(),
            self.min_values,
            self.max_values,
        );
        v.items_opt("default_values", self.default_values.as_deref(), 0, 25);

        let mut defaults = v.field("default_values");
        for (i, value) in self.default_values.iter().flatten().enumerate() {
            if value.kind != SnowflakeSelectDefaultValueTypes::Channel {
                defaults.index(i).fail_field(
                    "type",
                    ValidationCode::BaseTypeChoices,
                    "Default value type does not match the select type.",
                );
            }
        }
    }
}

tagged_union! {
    /// Any component, discriminated by its `type`.
    pub enum MessageComponent by MessageComponentTypes {
        ActionRow(ActionRowComponent) = [ActionRow],
        Button(ButtonComponent) = [Button],
        StringSelect(StringSelectComponent) = [StringSelect],
        TextInput(TextInputComponent) = [TextInput],
        UserSelect(UserSelectComponent) = [UserSelect],
        RoleSelect(RoleSelectComponent) = [RoleSelect],
        MentionableSelect(MentionableSelectComponent) = [MentionableSelect],
        ChannelSelect(ChannelSelectComponent) = [ChannelSelect],
    }
}

impl Validate for MessageComponent {
    fn validate_with(&self, v: &mut Validator<'_>) {
        match self {
            Self::ActionRow(row) => row.validate_with(v),
            Self::Button(button) => button.validate_with(v),
            Self::StringSelect(select) => select.validate_with(v),
            Self::TextInput(input) => input.validate_with(v),
            Self::UserSelect(select) => select.validate_with(v),
            Self::RoleSelect(select) => select.validate_with(v),
            Self::MentionableSelect(select) => select.validate_with(v),
            Self::ChannelSelect(select) => select.validate_with(v),
        }
    }
}

/// Checks a top-level component list: item count, each component, and that every entry is
/// an action row.
pub fn validate_rows(v: &mut Validator<'_>, name: &str, components: Option<&[MessageComponent]>) {
    let Some(components) = components else {
        return;
    };

    v.items(name, components, 0, MAX_ROW_CHILDREN);
    v.each(name, components);

    let mut list = v.field(name);
    for (i, component) in components.iter().enumerate() {
        if !matches!(component, MessageComponent::ActionRow(_)) {
            list.index(i).fail(
                ValidationCode::BaseTypeInvalid,
                "Top-level components must be action rows.",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(components: serde_json::Value) -> serde_json::Value {
        json!({ "type": 1, "components": components })
    }

    /// Tests parsing a row of mixed components.
    ///
    /// Expected: Ok with each child resolved to its own variant
    #[test]
    fn parses_row_of_components() {
        let component: MessageComponent = serde_json::from_value(row(json!([
            { "type": 2, "style": 1, "custom_id": "confirm", "label": "Confirm" },
            { "type": 2, "style": 5, "url": "https://discord.com", "label": "Docs" }
        ])))
        .unwrap();
        assert!(component.validate().is_ok());

        let MessageComponent::ActionRow(action_row) = component else {
            panic!("expected an action row");
        };
        assert_eq!(action_row.components.len(), 2);
        assert!(matches!(action_row.components[0], MessageComponent::Button(_)));
    }

    /// Tests that a row holding six buttons exceeds the row width.
    ///
    /// Expected: Err with BASE_TYPE_MAX_LENGTH at `components`
    #[test]
    fn row_is_limited_to_five_children() {
        let button = json!({ "type": 2, "style": 2, "custom_id": "b" });
        let component: MessageComponent =
            serde_json::from_value(row(json!(vec![button; 6]))).unwrap();

        let details = component.validate().unwrap_err();
        assert_eq!(details.codes_at(&["components"]), vec!["BASE_TYPE_MAX_LENGTH"]);
    }

    /// Tests that link buttons need a url and no custom_id.
    ///
    /// Expected: Err with BASE_TYPE_REQUIRED at `url` and BASE_TYPE_INVALID at `custom_id`
    #[test]
    fn link_button_rules() {
        let button: ButtonComponent = serde_json::from_value(json!({
            "type": 2, "style": 5, "custom_id": "nope"
        }))
        .unwrap();

        let details = button.validate().unwrap_err();
        assert_eq!(details.codes_at(&["url"]), vec!["BASE_TYPE_REQUIRED"]);
        assert_eq!(details.codes_at(&["custom_id"]), vec!["BASE_TYPE_INVALID"]);
    }

    /// Tests select option bounds.
    ///
    /// Expected: Err at `options` for an empty list and at `options.0.label` for a long label
    #[test]
    fn string_select_option_bounds() {
        let empty: StringSelectComponent = serde_json::from_value(json!({
            "type": 3, "custom_id": "pick", "options": []
        }))
        .unwrap();
        let details = empty.validate().unwrap_err();
        assert_eq!(details.codes_at(&["options"]), vec!["BASE_TYPE_MIN_LENGTH"]);

        let long: StringSelectComponent = serde_json::from_value(json!({
            "type": 3,
            "custom_id": "pick",
            "options": [{ "label": "l".repeat(101), "value": "v" }]
        }))
        .unwrap();
        let details = long.validate().unwrap_err();
        assert_eq!(
            details.codes_at(&["options", "0", "label"]),
            vec!["BASE_TYPE_BAD_LENGTH"]
        );
    }

    /// Tests the text input label bound.
    ///
    /// Expected: Err at `label` for 46 characters
    #[test]
    fn text_input_label_bound() {
        let input: TextInputComponent = serde_json::from_value(json!({
            "type": 4, "custom_id": "reason", "style": 2, "label": "l".repeat(46)
        }))
        .unwrap();

        let details = input.validate().unwrap_err();
        assert_eq!(details.codes_at(&["label"]), vec!["BASE_TYPE_BAD_LENGTH"]);
    }

    /// Tests that user, role and mentionable selects share a shape under their own names.
    ///
    /// Expected: types 5, 6 and 7 resolve to their own variants, each wrapping the shared shape
    #[test]
    fn snowflake_selects_share_shape() {
        let parse = |kind: u8| -> MessageComponent {
            serde_json::from_value(json!({ "type": kind, "custom_id": "who" })).unwrap()
        };

        assert!(matches!(parse(5), MessageComponent::UserSelect(_)));
        assert!(matches!(parse(6), MessageComponent::RoleSelect(_)));
        let MessageComponent::MentionableSelect(select) = parse(7) else {
            panic!("expected a mentionable select");
        };
        assert_eq!(select.custom_id, "who");
    }

    /// Tests that each named select accepts only its own type.
    ///
    /// Expected: a role select rejected as UserSelectComponent, accepted as RoleSelectComponent
    #[test]
    fn named_selects_reject_other_types() {
        let role = json!({ "type": 6, "custom_id": "who" });

        assert!(crate::registry::validate_json("UserSelectComponent", &role).is_err());
        assert!(crate::registry::validate_json("RoleSelectComponent", &role).is_ok());
        let select: RoleSelectComponent = serde_json::from_value(role).unwrap();
        assert_eq!(select.kind, MessageComponentTypes::RoleSelect);
    }

    /// Tests that only action rows may appear at the top level.
    ///
    /// Expected: Err with BASE_TYPE_INVALID at `components.0`
    #[test]
    fn top_level_must_be_rows() {
        let button: MessageComponent =
            serde_json::from_value(json!({ "type": 2, "style": 1, "custom_id": "x" })).unwrap();

        let mut details = crate::ErrorDetails::default();
        validate_rows(&mut Validator::new(&mut details), "components", Some(&[button]));
        details.prune();

        assert_eq!(details.codes_at(&["components", "0"]), vec!["BASE_TYPE_INVALID"]);
    }
}
