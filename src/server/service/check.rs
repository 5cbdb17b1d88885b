//! Checks a concrete request against the route catalogue without sending it.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use schema::registry;
use schema::route::{ContentType, Route};
use schema::routes;
use schema::validate::{ValidationCode, Validator};
use schema::ErrorDetails;
use serde_json::Value;
use url::Url;

use crate::server::{
    error::AppError,
    model::check::{CheckOutcome, CheckParams},
};

/// Matches the `/api` and `/api/vN` prefixes a caller may copy along with the path.
fn api_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^/api(?:/v[0-9]+)?(/.*)?$").expect("valid regex pattern")
    })
}

pub struct CheckService;

impl CheckService {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the request to a route and checks its path, query and body.
    ///
    /// Failures in the request itself are reported in the outcome. Only a request that cannot
    /// be resolved at all is an error.
    ///
    /// # Returns
    /// - `Ok(CheckOutcome)` - Route resolved; `errors` is empty when the request conforms
    /// - `Err(AppError::BadRequest)` - The path is not a usable URL path
    /// - `Err(AppError::NotFound)` - No route serves this method and path
    pub fn check(&self, params: CheckParams) -> Result<CheckOutcome, AppError> {
        let (path, mut query) = normalize(&params.path)?;
        query.extend(params.query);

        let (route, captures) = routes::resolve(params.method, &path).ok_or_else(|| {
            tracing::debug!("No route for {} {}", params.method, path);
            AppError::NotFound("404: Not Found".to_string())
        })?;

        let mut errors = ErrorDetails::default();
        {
            let mut v = Validator::new(&mut errors);

            let mut path_v = v.field("path");
            for param in route.path_params() {
                if let Some(value) = captures.get(param.name) {
                    param.check(&mut path_v, value);
                }
            }

            let mut query_v = v.field("query");
            for param in route.query {
                match query.get(param.name) {
                    Some(value) => param.kind.check(&mut query_v, param.name, value),
                    None if param.required => query_v.required(param.name),
                    None => {}
                }
            }
        }

        if let Some(details) = check_body(route, params.content_type.as_deref(), params.body) {
            errors.merge_at("body", details);
        }
        errors.prune();

        Ok(CheckOutcome {
            route,
            params: captures,
            errors,
        })
    }
}

impl Default for CheckService {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a submitted path into a catalogue-relative path and its query pairs.
///
/// Accepts a bare path, a path with the `/api/v10` prefix, or a full URL. Percent-escapes are
/// kept as written.
fn normalize(raw: &str) -> Result<(String, BTreeMap<String, String>), AppError> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://localhost/")
            .and_then(|base| base.join(raw))
            .map_err(|err| AppError::BadRequest(format!("Invalid path '{}': {}", raw, err)))?,
        Err(err) => {
            return Err(AppError::BadRequest(format!(
                "Invalid path '{}': {}",
                raw, err
            )))
        }
    };

    let query = url.query_pairs().into_owned().collect();
    let path = match api_prefix().captures(url.path()) {
        Some(caps) => caps
            .get(1)
            .map_or_else(|| "/".to_string(), |rest| rest.as_str().to_string()),
        None => url.path().to_string(),
    };

    Ok((path, query))
}

/// Checks the body against the route's declaration; `None` when nothing is wrong.
fn check_body(
    route: &Route,
    content_type: Option<&str>,
    body: Option<Value>,
) -> Option<ErrorDetails> {
    let declared = route.body?;
    let mut details = ErrorDetails::default();

    if let Some(header) = content_type {
        let accepted = ContentType::from_header(header).is_some_and(|ct| declared.accepts(ct));
        if !accepted {
            let expected: Vec<_> = declared
                .content_types
                .iter()
                .map(|ct| ct.as_str())
                .collect();
            Validator::new(&mut details).fail(
                ValidationCode::BaseTypeInvalid,
                format!(
                    "Content type \"{}\" is not accepted; expected one of ({}).",
                    header,
                    expected.join(", ")
                ),
            );
            return Some(details);
        }
    }

    match body {
        Some(body) => {
            if let Err(errors) = registry::validate_ref(declared.schema, &body) {
                details.merge(errors);
            }
        }
        None if declared.required => Validator::new(&mut details)
            .fail(ValidationCode::BaseTypeRequired, "This field is required"),
        None => {}
    }

    (!details.is_empty()).then_some(details)
}

#[cfg(test)]
mod tests {
    use schema::route::Method;
    use serde_json::json;

    use super::*;

    fn params(method: Method, path: &str) -> CheckParams {
        CheckParams {
            method,
            path: path.to_string(),
            query: BTreeMap::new(),
            content_type: None,
            body: None,
        }
    }

    /// Tests prefix and URL normalization.
    ///
    /// Expected: `/api`, `/api/v10` and full URLs reduce to the catalogue path, query kept
    #[test]
    fn normalizes_paths() {
        let (path, query) = normalize("/api/v10/channels/1/messages?limit=5").unwrap();
        assert_eq!(path, "/channels/1/messages");
        assert_eq!(query.get("limit").map(String::as_str), Some("5"));

        assert_eq!(normalize("https://discord.com/api/gateway").unwrap().0, "/gateway");
        assert_eq!(normalize("users/@me").unwrap().0, "/users/@me");
        assert_eq!(
            normalize("/applications/1/commands").unwrap().0,
            "/applications/1/commands"
        );
    }

    /// Tests a conforming request.
    ///
    /// Expected: create_message resolved, channel_id captured, no errors
    #[test]
    fn accepts_conforming_request() {
        let mut request = params(Method::Post, "/api/v10/channels/41771983423143937/messages");
        request.content_type = Some("application/json".to_string());
        request.body = Some(json!({ "content": "Hello, World!" }));

        let outcome = CheckService::new().check(request).unwrap();

        assert_eq!(outcome.route.operation_id, "create_message");
        assert_eq!(outcome.params["channel_id"], "41771983423143937");
        assert!(outcome.is_valid());
    }

    /// Tests path and query parameter failures.
    ///
    /// Verifies explicit query entries override those in the path.
    ///
    /// Expected: NUMBER_TYPE_COERCE on channel_id, NUMBER_TYPE_MAX on limit
    #[test]
    fn reports_param_failures() {
        let mut request = params(Method::Get, "/channels/general/messages?limit=5");
        request.query.insert("limit".to_string(), "500".to_string());

        let outcome = CheckService::new().check(request).unwrap();

        assert_eq!(
            outcome.errors.codes_at(&["path", "channel_id"]),
            vec!["NUMBER_TYPE_COERCE"]
        );
        assert_eq!(
            outcome.errors.codes_at(&["query", "limit"]),
            vec!["NUMBER_TYPE_MAX"]
        );
        assert!(outcome.errors.get(&["body"]).is_none());
    }

    /// Tests a missing required query parameter.
    ///
    /// Expected: BASE_TYPE_REQUIRED under query.query
    #[test]
    fn reports_missing_required_query() {
        let request = params(Method::Get, "/guilds/197038439483310086/members/search");

        let outcome = CheckService::new().check(request).unwrap();

        assert_eq!(outcome.route.operation_id, "search_guild_members");
        assert_eq!(
            outcome.errors.codes_at(&["query", "query"]),
            vec!["BASE_TYPE_REQUIRED"]
        );
    }

    /// Tests body failures.
    ///
    /// Expected: missing body and oversized content reported under body
    #[test]
    fn reports_body_failures() {
        let path = "/channels/41771983423143937/messages";

        let outcome = CheckService::new()
            .check(params(Method::Post, path))
            .unwrap();
        assert_eq!(outcome.errors.codes_at(&["body"]), vec!["BASE_TYPE_REQUIRED"]);

        let mut request = params(Method::Post, path);
        request.body = Some(json!({ "content": "a".repeat(4001) }));
        let outcome = CheckService::new().check(request).unwrap();
        assert_eq!(
            outcome.errors.codes_at(&["body", "content"]),
            vec!["BASE_TYPE_MAX_LENGTH"]
        );
    }

    /// Tests content type negotiation.
    ///
    /// Expected: form encoding rejected for a JSON or multipart route
    #[test]
    fn rejects_unaccepted_content_type() {
        let mut request = params(Method::Post, "/channels/41771983423143937/messages");
        request.content_type = Some("application/x-www-form-urlencoded".to_string());
        request.body = Some(json!({ "content": "hi" }));

        let outcome = CheckService::new().check(request).unwrap();

        assert_eq!(outcome.errors.codes_at(&["body"]), vec!["BASE_TYPE_INVALID"]);
    }

    /// Tests an unroutable request.
    ///
    /// Expected: Err(AppError::NotFound)
    #[test]
    fn rejects_unknown_route() {
        let result = CheckService::new().check(params(Method::Get, "/nope"));

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
