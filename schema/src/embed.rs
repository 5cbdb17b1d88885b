//! Rich embeds, as sent in message bodies and as returned on messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::guild::MAX_COLOR;
use crate::validate::{Validate, ValidationCode, Validator};

pub const MAX_TITLE_LENGTH: usize = 256;
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;
pub const MAX_FIELDS: usize = 25;
pub const MAX_FIELD_NAME_LENGTH: usize = 256;
pub const MAX_FIELD_VALUE_LENGTH: usize = 1024;
pub const MAX_FOOTER_LENGTH: usize = 2048;
pub const MAX_AUTHOR_NAME_LENGTH: usize = 256;
pub const MAX_URL_LENGTH: usize = 2048;

/// Combined text budget across every embed of one message.
pub const MAX_TOTAL_CHARACTERS: usize = 6000;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RichEmbedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 256)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub icon_url: Option<String>,
}

impl Validate for RichEmbedAuthor {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 0, MAX_AUTHOR_NAME_LENGTH);
        v.length_opt("url", self.url.as_deref(), 0, MAX_URL_LENGTH);
        v.length_opt("icon_url", self.icon_url.as_deref(), 0, MAX_URL_LENGTH);
    }
}

/// Image, thumbnail or video reference; only the URL is honoured on requests.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RichEmbedMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl Validate for RichEmbedMedia {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("url", self.url.as_deref(), 0, MAX_URL_LENGTH);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RichEmbedFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub icon_url: Option<String>,
}

impl Validate for RichEmbedFooter {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("text", self.text.as_deref(), 0, MAX_FOOTER_LENGTH);
        v.length_opt("icon_url", self.icon_url.as_deref(), 0, MAX_URL_LENGTH);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RichEmbedField {
    #[schema(max_length = 256)]
    pub name: String,
    #[schema(max_length = 1024)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl Validate for RichEmbedField {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length("name", &self.name, 0, MAX_FIELD_NAME_LENGTH);
        v.length("value", &self.value, 0, MAX_FIELD_VALUE_LENGTH);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RichEmbedProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 256)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub url: Option<String>,
}

impl Validate for RichEmbedProvider {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("name", self.name.as_deref(), 0, 256);
        v.length_opt("url", self.url.as_deref(), 0, MAX_URL_LENGTH);
    }
}

/// Embed supplied when creating or editing a message.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RichEmbed {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 2048)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 256)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0, maximum = 16777215)]
    pub color: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_length = 4096)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<RichEmbedAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<RichEmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<RichEmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<RichEmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(max_items = 25)]
    pub fields: Option<Vec<RichEmbedField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<RichEmbedProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<RichEmbedMedia>,
}

impl RichEmbed {
    /// Characters counted against [`MAX_TOTAL_CHARACTERS`]: title, description, field names
    /// and values, footer text and author name.
    pub fn character_count(&self) -> usize {
        let count = |s: Option<&str>| s.map_or(0, |s| s.chars().count());

        let fields = self.fields.as_deref().unwrap_or_default().iter().map(|field| {
            field.name.chars().count() + field.value.chars().count()
        });

        count(self.title.as_deref())
            + count(self.description.as_deref())
            + count(self.footer.as_ref().and_then(|f| f.text.as_deref()))
            + count(self.author.as_ref().and_then(|a| a.name.as_deref()))
            + fields.sum::<usize>()
    }
}

impl Validate for RichEmbed {
    fn validate_with(&self, v: &mut Validator<'_>) {
        v.length_opt("url", self.url.as_deref(), 0, MAX_URL_LENGTH);
        v.length_opt("title", self.title.as_deref(), 0, MAX_TITLE_LENGTH);
        v.range_opt("color", self.color, 0, MAX_COLOR);
        v.length_opt(
            "description",
            self.description.as_deref(),
            0,
            MAX_DESCRIPTION_LENGTH,
        );
        v.nested_opt("author", self.author.as_ref());
        v.nested_opt("image", self.image.as_ref());
        v.nested_opt("thumbnail", self.thumbnail.as_ref());
        v.nested_opt("footer", self.footer.as_ref());
        v.nested_opt("provider", self.provider.as_ref());
        v.nested_opt("video", self.video.as_ref());
        v.items_opt("fields", self.fields.as_deref(), 0, MAX_FIELDS);
        v.each_opt("fields", self.fields.as_deref());
    }
}

/// Checks a message's embed list: item count, each embed, and the combined text budget.
pub fn validate_embeds(v: &mut Validator<'_>, embeds: Option<&[RichEmbed]>, max: usize) {
    let Some(embeds) = embeds else {
        return;
    };

    v.items("embeds", embeds, 0, max);
    v.each("embeds", embeds);

    let total: usize = embeds.iter().map(RichEmbed::character_count).sum();
    if total > MAX_TOTAL_CHARACTERS {
        v.fail_field(
            "embeds",
            ValidationCode::BaseTypeMaxLength,
            format!(
                "Embed size exceeds maximum size of {}",
                MAX_TOTAL_CHARACTERS
            ),
        );
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedFieldResponse {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedAuthorResponse {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedImageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_version: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedVideoResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedFooterResponse {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedProviderResponse {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageEmbedResponse {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<MessageEmbedFieldResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<MessageEmbedAuthorResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<MessageEmbedProviderResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MessageEmbedImageResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MessageEmbedImageResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<MessageEmbedVideoResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<MessageEmbedFooterResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests nested embed limits.
    ///
    /// Verifies that failures in the author, footer and individual fields are reported at
    /// their own paths.
    ///
    /// Expected: Err at `title`, `author.name`, `footer.text` and `fields.1.value`
    #[test]
    fn reports_nested_limits() {
        let embed: RichEmbed = serde_json::from_value(json!({
            "title": "t".repeat(257),
            "author": { "name": "a".repeat(257) },
            "footer": { "text": "f".repeat(2049) },
            "fields": [
                { "name": "ok", "value": "ok" },
                { "name": "ok", "value": "v".repeat(1025) }
            ]
        }))
        .unwrap();

        let details = embed.validate().unwrap_err();
        assert_eq!(details.codes_at(&["title"]), vec!["BASE_TYPE_MAX_LENGTH"]);
        assert_eq!(details.codes_at(&["author", "name"]), vec!["BASE_TYPE_MAX_LENGTH"]);
        assert_eq!(details.codes_at(&["footer", "text"]), vec!["BASE_TYPE_MAX_LENGTH"]);
        assert_eq!(
            details.codes_at(&["fields", "1", "value"]),
            vec!["BASE_TYPE_MAX_LENGTH"]
        );
    }

    /// Tests the field count limit.
    ///
    /// Expected: 25 fields accepted, 26 rejected at `fields`
    #[test]
    fn limits_field_count() {
        let field = RichEmbedField {
            name: "n".into(),
            value: "v".into(),
            inline: None,
        };
        let mut embed = RichEmbed {
            fields: Some(vec![field.clone(); MAX_FIELDS]),
            ..Default::default()
        };
        assert!(embed.validate().is_ok());

        embed.fields = Some(vec![field; MAX_FIELDS + 1]);
        let details = embed.validate().unwrap_err();
        assert_eq!(details.codes_at(&["fields"]), vec!["BASE_TYPE_MAX_LENGTH"]);
    }

    /// Tests the combined text budget across embeds.
    ///
    /// Verifies that two embeds each within their own limits can still exceed the shared
    /// 6000-character budget.
    ///
    /// Expected: Err with BASE_TYPE_MAX_LENGTH at `embeds`
    #[test]
    fn enforces_total_character_budget() {
        let embed = RichEmbed {
            description: Some("d".repeat(MAX_DESCRIPTION_LENGTH)),
            ..Default::default()
        };
        let embeds = vec![embed.clone(), embed];

        let mut details = crate::ErrorDetails::default();
        validate_embeds(&mut Validator::new(&mut details), Some(&embeds), 10);
        details.prune();

        assert_eq!(details.codes_at(&["embeds"]), vec!["BASE_TYPE_MAX_LENGTH"]);
    }
}
