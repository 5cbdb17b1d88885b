//! Error bodies returned by the Discord API and raised while checking payloads.
//!
//! Three wire shapes are declared here: the plain [`ErrorResponse`], the [`RatelimitedResponse`]
//! sent with HTTP 429, and the recursive [`ErrorDetails`] tree carrying field-level validation
//! failures. [`SchemaError`] is the in-process error produced when a payload does not conform.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_path_to_error::Segment;
use thiserror::Error;
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, OneOfBuilder, Schema, Type};
use utoipa::openapi::{Ref, RefOr};
use utoipa::ToSchema;

/// General error with no more specific JSON error code.
pub const GENERAL_ERROR: i32 = 0;

/// The request body failed validation; `errors` holds the details.
pub const INVALID_FORM_BODY: i32 = 50035;

/// The request body could not be parsed as JSON.
pub const INVALID_JSON: i32 = 50109;

/// Top-level error body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

impl ErrorResponse {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: None,
        }
    }

    /// The 50035 body wrapping a validation tree.
    pub fn invalid_form_body(errors: ErrorDetails) -> Self {
        Self {
            code: INVALID_FORM_BODY,
            message: "Invalid Form Body".to_string(),
            errors: Some(errors),
        }
    }
}

/// Body sent with HTTP 429.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RatelimitedResponse {
    pub code: i32,
    pub message: String,
    /// Seconds to wait before retrying.
    pub retry_after: f64,
    /// Whether the global limit, rather than a per-route bucket, was hit.
    pub global: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

/// A single field-level failure, e.g. `BASE_TYPE_BAD_LENGTH`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

/// Recursive validation tree.
///
/// A node either lists failures for the value at its position under `_errors`, maps field
/// names (or array indices, as decimal strings) to child nodes, or both.
///
/// ```json
/// { "options": { "0": { "name": { "_errors": [{ "code": "BASE_TYPE_BAD_LENGTH", "message": "..." }] } } } }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ErrorDetails {
    #[serde(rename = "_errors", default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, ErrorDetails>,
}

impl ErrorDetails {
    /// A node holding one failure and no children.
    pub fn leaf(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                code: code.into(),
                message: message.into(),
            }],
            fields: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.fields.values().all(ErrorDetails::is_empty)
    }

    /// Walks down the tree following `path` (field names or indices).
    pub fn get(&self, path: &[&str]) -> Option<&ErrorDetails> {
        path.iter().try_fold(self, |node, key| node.fields.get(*key))
    }

    /// Codes recorded directly at `path`.
    pub fn codes_at(&self, path: &[&str]) -> Vec<&str> {
        self.get(path)
            .map(|node| node.errors.iter().map(|e| e.code.as_str()).collect())
            .unwrap_or_default()
    }

    /// Drops child nodes that carry no failures anywhere below them.
    pub fn prune(&mut self) {
        self.fields.retain(|_, child| {
            child.prune();
            !child.is_empty()
        });
    }

    /// Grafts `other` under `key`, merging with anything already recorded there.
    pub fn merge_at(&mut self, key: &str, other: ErrorDetails) {
        let node = self.fields.entry(key.to_string()).or_default();
        node.merge(other);
    }

    /// Places `node` below the chain of keys in `path`.
    pub fn nested(path: &[String], node: ErrorDetails) -> Self {
        path.iter().rev().fold(node, |child, key| {
            let mut parent = ErrorDetails::default();
            parent.merge_at(key, child);
            parent
        })
    }

    pub fn merge(&mut self, other: ErrorDetails) {
        self.errors.extend(other.errors);
        for (key, child) in other.fields {
            self.merge_at(&key, child);
        }
    }
}

impl utoipa::PartialSchema for ErrorDetails {
    fn schema() -> RefOr<Schema> {
        let nested = ObjectBuilder::new()
            .schema_type(Type::Object)
            .additional_properties(Some(RefOr::Ref(Ref::from_schema_name("ErrorDetails"))))
            .build();

        let one_of = OneOfBuilder::new()
            .item(RefOr::T(Schema::Object(nested)))
            .item(RefOr::Ref(Ref::from_schema_name("InnerErrors")))
            .build();

        RefOr::T(Schema::OneOf(one_of))
    }
}

impl ToSchema for ErrorDetails {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("ErrorDetails")
    }

    fn schemas(schemas: &mut Vec<(String, RefOr<Schema>)>) {
        schemas.push(("InnerErrors".to_string(), inner_errors_schema()));
        schemas.push((
            <FieldError as ToSchema>::name().into_owned(),
            <FieldError as utoipa::PartialSchema>::schema(),
        ));
    }
}

fn inner_errors_schema() -> RefOr<Schema> {
    let errors = ArrayBuilder::new()
        .items(RefOr::Ref(Ref::from_schema_name("FieldError")))
        .build();

    let object = ObjectBuilder::new()
        .schema_type(Type::Object)
        .property("_errors", RefOr::T(Schema::Array(errors)))
        .required("_errors")
        .build();

    RefOr::T(Schema::Object(object))
}

/// Separates a failure message from the path it occurred at inside a discriminated union.
const NESTED_AT: &str = " (at ";

/// A payload failed to conform to a named schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("Unknown schema '{0}'")]
    UnknownSchema(String),

    /// The payload could not be deserialized into the schema's shape: a required key is
    /// missing, a value has the wrong type or nullability, or an enum literal is undeclared.
    ///
    /// `path` leads from the payload root to the offending field; for a missing key it ends
    /// with that key.
    #[error("Payload does not match the schema shape: {message}")]
    Shape { path: Vec<String>, message: String },

    /// The payload has the right shape but breaks declared bounds.
    #[error("Payload violates schema constraints")]
    Constraints(ErrorDetails),
}

impl SchemaError {
    /// A shape failure at the payload root.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Renders the failure as a validation tree.
    ///
    /// Shape errors are placed at their field path: a missing key yields `BASE_TYPE_REQUIRED`
    /// under that key, anything else `BASE_TYPE_INVALID` under the offending value.
    pub fn details(&self) -> ErrorDetails {
        match self {
            Self::UnknownSchema(name) => {
                ErrorDetails::leaf("BASE_TYPE_INVALID", format!("Unknown schema '{}'", name))
            }
            Self::Shape { path, message } => {
                let code = if missing_field(message).is_some() {
                    "BASE_TYPE_REQUIRED"
                } else {
                    "BASE_TYPE_INVALID"
                };
                ErrorDetails::nested(path, ErrorDetails::leaf(code, message.as_str()))
            }
            Self::Constraints(details) => details.clone(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let mut path = path_keys(err.path());
        let full = err.into_inner().to_string();

        let (message, nested) = split_nested(&full);
        for keys in nested {
            path.extend(keys.split('.').map(str::to_string));
        }
        if let Some(field) = missing_field(message) {
            path.push(field.to_string());
        }

        Self::Shape {
            path,
            message: message.to_string(),
        }
    }
}

/// Field names and array indices along a deserialization path.
fn path_keys(path: &serde_path_to_error::Path) -> Vec<String> {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(index.to_string()),
            Segment::Map { key } => Some(key.clone()),
            _ => None,
        })
        .collect()
}

/// Message for a failure raised while deserializing the selected member of a union.
///
/// The union's own position is tracked by the caller; the path below it travels in the
/// message and is recovered when the outermost failure becomes a [`SchemaError`].
pub(crate) fn nested_message(err: &serde_path_to_error::Error<serde_json::Error>) -> String {
    let keys = path_keys(err.path());
    if keys.is_empty() {
        err.inner().to_string()
    } else {
        format!("{}{}{})", err.inner(), NESTED_AT, keys.join("."))
    }
}

/// Splits `message (at a.b) (at c)` into `message` and the nested paths, outermost first.
fn split_nested(message: &str) -> (&str, Vec<&str>) {
    let mut rest = message;
    let mut nested = Vec::new();

    while let Some(stripped) = rest.strip_suffix(')') {
        let Some(at) = stripped.rfind(NESTED_AT) else {
            break;
        };
        nested.push(&stripped[at + NESTED_AT.len()..]);
        rest = &stripped[..at];
    }

    (rest, nested)
}

/// The key named by serde's `missing field` message.
fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests the wire form of a nested validation tree.
    ///
    /// Expected: children flattened beside `_errors`, empty `_errors` omitted
    #[test]
    fn serializes_nested_tree() {
        let mut details = ErrorDetails::default();
        details.merge_at("name", ErrorDetails::leaf("BASE_TYPE_BAD_LENGTH", "bad"));

        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({ "name": { "_errors": [{ "code": "BASE_TYPE_BAD_LENGTH", "message": "bad" }] } })
        );
    }

    /// Tests parsing a tree as Discord sends it.
    ///
    /// Expected: index keys become child nodes and codes are reachable by path
    #[test]
    fn parses_discord_error_body() {
        let body: ErrorResponse = serde_json::from_value(json!({
            "code": 50035,
            "message": "Invalid Form Body",
            "errors": {
                "embeds": { "0": { "title": { "_errors": [
                    { "code": "BASE_TYPE_MAX_LENGTH", "message": "Must be 256 or fewer in length." }
                ] } } }
            }
        }))
        .unwrap();

        let errors = body.errors.unwrap();
        assert_eq!(
            errors.codes_at(&["embeds", "0", "title"]),
            vec!["BASE_TYPE_MAX_LENGTH"]
        );
    }

    /// Tests pruning of empty branches.
    ///
    /// Expected: branches without failures removed, failing branch kept
    #[test]
    fn prune_removes_empty_branches() {
        let mut details = ErrorDetails::default();
        details.fields.entry("a".into()).or_default();
        details.merge_at("b", ErrorDetails::leaf("X", "x"));
        details.prune();

        assert!(!details.fields.contains_key("a"));
        assert!(details.fields.contains_key("b"));
    }

    /// Tests the rate limit body shape.
    ///
    /// Expected: `retry_after` and `global` are required
    #[test]
    fn ratelimited_requires_retry_after() {
        let ok = serde_json::from_value::<RatelimitedResponse>(json!({
            "code": 0, "message": "You are being rate limited.", "retry_after": 1.5, "global": false
        }));
        assert!(ok.is_ok());

        let missing = serde_json::from_value::<RatelimitedResponse>(json!({
            "code": 0, "message": "You are being rate limited.", "global": false
        }));
        assert!(missing.is_err());
    }

    /// Tests recovering union-internal paths from a failure message.
    ///
    /// Expected: base message kept, nested paths listed outermost first
    #[test]
    fn splits_nested_paths() {
        let (message, nested) = split_nested("missing field `label` (at 0) (at components.0)");

        assert_eq!(message, "missing field `label`");
        assert_eq!(nested, vec!["components.0", "0"]);
        assert_eq!(missing_field(message), Some("label"));
    }

    /// Tests rendering a shape failure below its field path.
    ///
    /// Expected: BASE_TYPE_REQUIRED at `embeds.0.title`, nothing at the root
    #[test]
    fn shape_details_follow_path() {
        let err = SchemaError::Shape {
            path: vec!["embeds".into(), "0".into(), "title".into()],
            message: "missing field `title`".into(),
        };

        let details = err.details();
        assert!(details.errors.is_empty());
        assert_eq!(
            details.codes_at(&["embeds", "0", "title"]),
            vec!["BASE_TYPE_REQUIRED"]
        );
    }
}
