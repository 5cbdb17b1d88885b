//! Conversion of static route descriptors into API DTOs.

use schema::route::{Body, ParamKind, PathParam, PathParamKind, QueryParam, Response, Route};
use schema::security::Security;

use crate::model::route::{BodyDto, ParamDto, ResponseDto, RouteSummaryDto, SecurityDto};

/// Human-readable constraint of a parameter kind, e.g. `integer 1..=100`.
pub fn describe_kind(kind: &ParamKind) -> String {
    match kind {
        ParamKind::Snowflake => "snowflake".to_string(),
        ParamKind::IntRange { min, max } => format!("integer {}..={}", min, max),
        ParamKind::Bool => "boolean".to_string(),
        ParamKind::BoundedString { min, max } => format!("string {}..={}", min, max),
        ParamKind::EnumLiterals(allowed) => format!("one of ({})", allowed.join(", ")),
        ParamKind::Timestamp => "timestamp".to_string(),
    }
}

impl From<Security> for SecurityDto {
    fn from(security: Security) -> Self {
        Self {
            kind: security.label().to_string(),
            schemes: security
                .scheme_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            scopes: security
                .scopes()
                .iter()
                .map(|scope| scope.as_str().to_string())
                .collect(),
        }
    }
}

impl From<PathParam> for ParamDto {
    fn from(param: PathParam) -> Self {
        let kind = match param.kind {
            PathParamKind::Snowflake => "snowflake",
            PathParamKind::String => "string",
        };

        Self {
            name: param.name.to_string(),
            kind: kind.to_string(),
            required: true,
        }
    }
}

impl From<&QueryParam> for ParamDto {
    fn from(param: &QueryParam) -> Self {
        Self {
            name: param.name.to_string(),
            kind: describe_kind(&param.kind),
            required: param.required,
        }
    }
}

impl From<&Body> for BodyDto {
    fn from(body: &Body) -> Self {
        Self {
            schema: body.schema.name().to_string(),
            list: body.schema.is_list(),
            content_types: body
                .content_types
                .iter()
                .map(|content_type| content_type.as_str().to_string())
                .collect(),
            required: body.required,
        }
    }
}

impl From<&Response> for ResponseDto {
    fn from(response: &Response) -> Self {
        Self {
            status: response.status,
            schema: response.schema.map(|schema| schema.name().to_string()),
            list: response.schema.is_some_and(|schema| schema.is_list()),
        }
    }
}

impl From<&Route> for RouteSummaryDto {
    fn from(route: &Route) -> Self {
        Self {
            operation_id: route.operation_id.to_string(),
            method: route.method.to_string(),
            path: route.path.to_string(),
            tag: route.tag.to_string(),
            summary: route.summary.to_string(),
            security: route.security.into(),
            path_params: route.path_params().into_iter().map(ParamDto::from).collect(),
            query: route.query.iter().map(ParamDto::from).collect(),
            body: route.body.as_ref().map(BodyDto::from),
            responses: route.responses.iter().map(ResponseDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use schema::routes;

    use super::*;

    /// Tests conversion of a route with query, body and mixed security.
    ///
    /// Expected: every descriptor field carried over, path params derived from the template
    #[test]
    fn converts_route_summary() {
        let route = routes::find("list_messages").unwrap();
        let dto = RouteSummaryDto::from(route);

        assert_eq!(dto.method, "GET");
        assert_eq!(dto.path, "/channels/{channel_id}/messages");
        assert_eq!(dto.security.kind, "bot");
        assert_eq!(dto.path_params[0].name, "channel_id");
        assert_eq!(dto.path_params[0].kind, "snowflake");

        let limit = dto.query.iter().find(|p| p.name == "limit").unwrap();
        assert_eq!(limit.kind, "integer 1..=100");
        assert!(!limit.required);

        assert!(dto.body.is_none());
        assert_eq!(dto.responses[0].status, 200);
        assert!(dto.responses[0].list);
    }

    /// Tests conversion of OAuth2 scopes.
    ///
    /// Expected: both scheme names and the identify scope listed
    #[test]
    fn converts_security_scopes() {
        let route = routes::find("get_my_user").unwrap();
        let dto = RouteSummaryDto::from(route);

        assert_eq!(dto.security.kind, "bot_or_oauth2");
        assert_eq!(dto.security.schemes, vec!["BotToken", "OAuth2"]);
        assert_eq!(dto.security.scopes, vec!["identify"]);
    }

    /// Tests the textual form of query parameter kinds.
    ///
    /// Expected: ranges and literal sets rendered inline
    #[test]
    fn describes_kinds() {
        assert_eq!(
            describe_kind(&ParamKind::BoundedString { min: 1, max: 100 }),
            "string 1..=100"
        );
        assert_eq!(
            describe_kind(&ParamKind::EnumLiterals(&["a", "b"])),
            "one of (a, b)"
        );
    }
}
