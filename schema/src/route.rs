//! Route descriptors.
//!
//! A [`Route`] ties an HTTP method and path template to its security requirement, query
//! parameters, request body and per-status responses. Descriptors are plain constants built with
//! the `const` builder methods below and collected in [`crate::routes`].
//!
//! Path parameters are not declared separately; they are read from the `{name}` segments of the
//! template. Parameters ending in `_id` are snowflakes, every other parameter is a non-empty
//! string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use thiserror::Error;
use utoipa::openapi::schema::{KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type};
use utoipa::openapi::{Ref, RefOr};

use crate::security::Security;
use crate::snowflake::Snowflake;
use crate::validate::{ValidationCode, Validator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported HTTP method '{0}'")]
pub struct UnsupportedMethod(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub const ALL: &'static [Method] = &[
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

/// Reference to a registry schema, either a single value or a JSON array of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaRef {
    One(&'static str),
    List(&'static str),
}

impl SchemaRef {
    pub const fn name(self) -> &'static str {
        match self {
            Self::One(name) | Self::List(name) => name,
        }
    }

    pub const fn is_list(self) -> bool {
        matches!(self, Self::List(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Json,
    FormUrlEncoded,
    Multipart,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
        }
    }

    /// Reads a `Content-Type` header value, ignoring parameters such as `charset` or `boundary`.
    pub fn from_header(value: &str) -> Option<Self> {
        let essence = value.split(';').next().unwrap_or_default().trim();

        [Self::Json, Self::FormUrlEncoded, Self::Multipart]
            .into_iter()
            .find(|content_type| content_type.as_str().eq_ignore_ascii_case(essence))
    }
}

const JSON: &[ContentType] = &[ContentType::Json];
const JSON_OR_MULTIPART: &[ContentType] = &[ContentType::Json, ContentType::Multipart];
const MULTIPART: &[ContentType] = &[ContentType::Multipart];
const ANY: &[ContentType] = &[
    ContentType::Json,
    ContentType::FormUrlEncoded,
    ContentType::Multipart,
];

/// Request body accepted by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Body {
    pub schema: SchemaRef,
    pub content_types: &'static [ContentType],
    pub required: bool,
}

impl Body {
    pub const fn json(schema: SchemaRef) -> Self {
        Self {
            schema,
            content_types: JSON,
            required: true,
        }
    }

    /// JSON, or multipart with the JSON document in the `payload_json` part beside file uploads.
    pub const fn json_or_multipart(schema: SchemaRef) -> Self {
        Self {
            schema,
            content_types: JSON_OR_MULTIPART,
            required: true,
        }
    }

    pub const fn multipart(schema: SchemaRef) -> Self {
        Self {
            schema,
            content_types: MULTIPART,
            required: true,
        }
    }

    pub const fn any(schema: SchemaRef) -> Self {
        Self {
            schema,
            content_types: ANY,
            required: true,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    pub fn accepts(&self, content_type: ContentType) -> bool {
        self.content_types.contains(&content_type)
    }
}

/// Value constraint on a query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Snowflake,
    IntRange { min: i64, max: i64 },
    Bool,
    BoundedString { min: usize, max: usize },
    /// One of a fixed set of literals, compared as written.
    EnumLiterals(&'static [&'static str]),
    /// RFC 3339 timestamp.
    Timestamp,
}

impl ParamKind {
    /// Records a failure under `name` if `value` does not satisfy this kind.
    pub fn check(&self, v: &mut Validator<'_>, name: &str, value: &str) {
        match *self {
            Self::Snowflake => {
                if value.parse::<Snowflake>().is_err() {
                    v.fail_field(
                        name,
                        ValidationCode::NumberTypeCoerce,
                        format!("Value \"{}\" is not snowflake.", value),
                    );
                }
            }
            Self::IntRange { min, max } => match value.parse::<i64>() {
                Ok(number) => v.range(name, number, min, max),
                Err(_) => v.fail_field(
                    name,
                    ValidationCode::NumberTypeCoerce,
                    format!("Value \"{}\" is not int.", value),
                ),
            },
            Self::Bool => {
                if !value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false") {
                    v.fail_field(
                        name,
                        ValidationCode::BooleanTypeCoerce,
                        format!("Value \"{}\" is not bool.", value),
                    );
                }
            }
            Self::BoundedString { min, max } => v.length(name, value, min, max),
            Self::EnumLiterals(allowed) => v.one_of(name, &value, allowed),
            Self::Timestamp => {
                if DateTime::parse_from_rfc3339(value).is_err() {
                    v.fail_field(
                        name,
                        ValidationCode::BaseTypeInvalid,
                        format!("Could not interpret \"{}\" as a timestamp.", value),
                    );
                }
            }
        }
    }

    /// OpenAPI schema for a parameter of this kind.
    pub fn schema(&self) -> RefOr<Schema> {
        let object = match *self {
            Self::Snowflake => return RefOr::Ref(Ref::from_schema_name("SnowflakeType")),
            Self::IntRange { min, max } => ObjectBuilder::new()
                .schema_type(Type::Integer)
                .minimum(Some(min))
                .maximum(Some(max)),
            Self::Bool => ObjectBuilder::new().schema_type(Type::Boolean),
            Self::BoundedString { min, max } => ObjectBuilder::new()
                .schema_type(Type::String)
                .min_length(Some(min))
                .max_length(Some(max)),
            Self::EnumLiterals(allowed) => ObjectBuilder::new()
                .schema_type(Type::String)
                .enum_values(Some(allowed.iter().copied())),
            Self::Timestamp => ObjectBuilder::new()
                .schema_type(Type::String)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::DateTime))),
        };

        RefOr::T(Schema::Object(object.build()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl QueryParam {
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// A declared response. `schema` is `None` for responses without a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub schema: Option<SchemaRef>,
}

impl Response {
    pub const fn ok(schema: SchemaRef) -> Self {
        Self {
            status: 200,
            schema: Some(schema),
        }
    }

    pub const fn created(schema: SchemaRef) -> Self {
        Self {
            status: 201,
            schema: Some(schema),
        }
    }

    pub const fn no_content() -> Self {
        Self {
            status: 204,
            schema: None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self.status {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            _ => "Response",
        }
    }
}

const NO_CONTENT: &[Response] = &[Response::no_content()];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathParamKind {
    Snowflake,
    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathParam {
    pub name: &'static str,
    pub kind: PathParamKind,
}

impl PathParam {
    fn from_name(name: &'static str) -> Self {
        let kind = if name.ends_with("_id") {
            PathParamKind::Snowflake
        } else {
            PathParamKind::String
        };

        Self { name, kind }
    }

    pub fn check(&self, v: &mut Validator<'_>, value: &str) {
        match self.kind {
            PathParamKind::Snowflake => ParamKind::Snowflake.check(v, self.name, value),
            PathParamKind::String if value.is_empty() => v.required(self.name),
            PathParamKind::String => {}
        }
    }

    pub fn schema(&self) -> RefOr<Schema> {
        match self.kind {
            PathParamKind::Snowflake => ParamKind::Snowflake.schema(),
            PathParamKind::String => RefOr::T(Schema::Object(
                ObjectBuilder::new()
                    .schema_type(Type::String)
                    .min_length(Some(1))
                    .build(),
            )),
        }
    }
}

enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

fn template_segments(template: &'static str) -> impl Iterator<Item = Segment> {
    template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(segment),
            }
        })
}

/// Path parameters captured by [`Route::matches`], keyed by template name.
pub type PathCaptures = BTreeMap<&'static str, String>;

/// Static description of one REST operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub operation_id: &'static str,
    pub method: Method,
    /// Template relative to the versioned API base, e.g. `/channels/{channel_id}/messages`.
    pub path: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub security: Security,
    pub query: &'static [QueryParam],
    pub body: Option<Body>,
    pub responses: &'static [Response],
}

impl Route {
    /// A bot-authenticated route answering `204 No Content`.
    pub const fn new(operation_id: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            operation_id,
            method,
            path,
            tag: "",
            summary: "",
            security: Security::Bot,
            query: &[],
            body: None,
            responses: NO_CONTENT,
        }
    }

    pub const fn tag(self, tag: &'static str) -> Self {
        Self { tag, ..self }
    }

    pub const fn summary(self, summary: &'static str) -> Self {
        Self { summary, ..self }
    }

    pub const fn security(self, security: Security) -> Self {
        Self { security, ..self }
    }

    pub const fn query(self, query: &'static [QueryParam]) -> Self {
        Self { query, ..self }
    }

    pub const fn body(self, body: Body) -> Self {
        Self {
            body: Some(body),
            ..self
        }
    }

    pub const fn responses(self, responses: &'static [Response]) -> Self {
        Self { responses, ..self }
    }

    pub fn path_params(&self) -> Vec<PathParam> {
        template_segments(self.path)
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(PathParam::from_name(name)),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Number of fixed segments in the template; the more specific route wins a tie.
    pub fn literal_segments(&self) -> usize {
        template_segments(self.path)
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count()
    }

    /// Registry names of every schema this route refers to.
    pub fn schema_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.body
            .iter()
            .map(|body| body.schema.name())
            .chain(
                self.responses
                    .iter()
                    .filter_map(|response| response.schema.map(SchemaRef::name)),
            )
    }

    /// Matches a concrete request path against this route's template.
    ///
    /// Literal segments must match exactly and every parameter must capture a non-empty
    /// segment. Captured values are returned as written; checking them is left to the caller.
    pub fn matches(&self, method: Method, path: &str) -> Option<PathCaptures> {
        if method != self.method {
            return None;
        }

        let mut expected = template_segments(self.path);
        let mut actual = path.split('/').filter(|segment| !segment.is_empty());
        let mut captures = PathCaptures::new();

        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return Some(captures),
                (Some(Segment::Literal(literal)), Some(segment)) if literal == segment => {}
                (Some(Segment::Param(name)), Some(segment)) => {
                    captures.insert(name, segment.to_string());
                }
                _ => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetails;

    const REACTION: Route = Route::new(
        "delete_user_message_reaction",
        Method::Delete,
        "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/{user_id}",
    );

    /// Tests that parameter kinds are derived from their names.
    ///
    /// Expected: `*_id` params are snowflakes, `emoji_name` is a string
    #[test]
    fn derives_path_params() {
        let params = REACTION.path_params();

        let kinds: Vec<_> = params.iter().map(|p| (p.name, p.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("channel_id", PathParamKind::Snowflake),
                ("message_id", PathParamKind::Snowflake),
                ("emoji_name", PathParamKind::String),
                ("user_id", PathParamKind::Snowflake),
            ]
        );
        assert_eq!(REACTION.literal_segments(), 3);
    }

    /// Tests capturing parameters from a concrete path.
    ///
    /// Expected: every template parameter captured verbatim
    #[test]
    fn matches_captures_params() {
        let captures = REACTION
            .matches(Method::Delete, "/channels/1/messages/2/reactions/%F0%9F%91%8D/3")
            .unwrap();

        assert_eq!(captures["channel_id"], "1");
        assert_eq!(captures["emoji_name"], "%F0%9F%91%8D");
        assert_eq!(captures["user_id"], "3");
    }

    /// Tests paths that must not match.
    ///
    /// Expected: None for wrong method, wrong literal or wrong segment count
    #[test]
    fn rejects_mismatched_paths() {
        assert!(REACTION
            .matches(Method::Get, "/channels/1/messages/2/reactions/x/3")
            .is_none());
        assert!(REACTION
            .matches(Method::Delete, "/channels/1/message/2/reactions/x/3")
            .is_none());
        assert!(REACTION
            .matches(Method::Delete, "/channels/1/messages/2/reactions/x")
            .is_none());
        assert!(REACTION
            .matches(Method::Delete, "/channels/1/messages/2/reactions/x/3/4")
            .is_none());
    }

    /// Tests query parameter checks for each kind.
    ///
    /// Expected: coercion failures and range failures recorded by name
    #[test]
    fn checks_query_param_kinds() {
        let mut details = ErrorDetails::default();
        let mut v = Validator::new(&mut details);

        ParamKind::IntRange { min: 1, max: 100 }.check(&mut v, "limit", "101");
        ParamKind::IntRange { min: 1, max: 100 }.check(&mut v, "page", "ten");
        ParamKind::Snowflake.check(&mut v, "after", "01");
        ParamKind::Bool.check(&mut v, "with_counts", "yes");
        ParamKind::Bool.check(&mut v, "wait", "True");
        ParamKind::EnumLiterals(&["0", "1"]).check(&mut v, "type", "2");
        ParamKind::Timestamp.check(&mut v, "before", "2024-01-01T00:00:00Z");

        assert_eq!(details.codes_at(&["limit"]), vec!["NUMBER_TYPE_MAX"]);
        assert_eq!(details.codes_at(&["page"]), vec!["NUMBER_TYPE_COERCE"]);
        assert_eq!(details.codes_at(&["after"]), vec!["NUMBER_TYPE_COERCE"]);
        assert_eq!(details.codes_at(&["with_counts"]), vec!["BOOLEAN_TYPE_COERCE"]);
        assert_eq!(details.codes_at(&["type"]), vec!["BASE_TYPE_CHOICES"]);
        assert!(details.get(&["wait"]).is_none());
        assert!(details.get(&["before"]).is_none());
    }

    /// Tests content type header parsing.
    ///
    /// Expected: parameters ignored, case-insensitive, unknown types rejected
    #[test]
    fn parses_content_type_headers() {
        assert_eq!(
            ContentType::from_header("application/json; charset=utf-8"),
            Some(ContentType::Json)
        );
        assert_eq!(
            ContentType::from_header("Multipart/Form-Data; boundary=xyz"),
            Some(ContentType::Multipart)
        );
        assert_eq!(ContentType::from_header("text/plain"), None);
    }

    /// Tests method parsing.
    ///
    /// Expected: case-insensitive, unknown methods rejected
    #[test]
    fn parses_methods() {
        assert_eq!("patch".parse::<Method>(), Ok(Method::Patch));
        assert_eq!(
            "TRACE".parse::<Method>(),
            Err(UnsupportedMethod("TRACE".to_string()))
        );
    }
}
