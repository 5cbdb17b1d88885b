//! Parameter and outcome models for request checking.

use std::collections::BTreeMap;

use schema::route::{Method, PathCaptures, Route};
use schema::ErrorDetails;
use serde_json::Value;

use crate::{
    model::check::{CheckReportDto, CheckRequestDto},
    server::error::AppError,
};

/// A request to check, with its method already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckParams {
    pub method: Method,
    /// Path as submitted; may still carry the API prefix, a query string or a host.
    pub path: String,
    /// Explicit query parameters; these win over any found in `path`.
    pub query: BTreeMap<String, String>,
    pub content_type: Option<String>,
    /// Request body; `None` and JSON `null` both mean no body was sent.
    pub body: Option<Value>,
}

impl CheckParams {
    /// Converts the request DTO, rejecting methods the catalogue never uses.
    ///
    /// # Returns
    /// - `Ok(CheckParams)` - Method recognized
    /// - `Err(AppError::BadRequest)` - Method is not GET, POST, PUT, PATCH or DELETE
    pub fn from_dto(dto: CheckRequestDto) -> Result<Self, AppError> {
        let method = dto
            .method
            .parse::<Method>()
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        Ok(Self {
            method,
            path: dto.path,
            query: dto.query,
            content_type: dto.content_type,
            body: dto.body.filter(|body| !body.is_null()),
        })
    }
}

/// Result of checking a request against the route it resolved to.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub route: &'static Route,
    pub params: PathCaptures,
    /// Failures grouped under `path`, `query` and `body`; empty when the request conforms.
    pub errors: ErrorDetails,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_dto(self) -> CheckReportDto {
        let valid = self.is_valid();

        CheckReportDto {
            operation_id: self.route.operation_id.to_string(),
            method: self.route.method.to_string(),
            path_template: self.route.path.to_string(),
            params: self
                .params
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            valid,
            errors: (!valid).then_some(self.errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str) -> CheckRequestDto {
        CheckRequestDto {
            method: method.to_string(),
            path: "/gateway".to_string(),
            query: BTreeMap::new(),
            content_type: None,
            body: Some(Value::Null),
        }
    }

    /// Tests method parsing when converting a check request.
    ///
    /// Expected: lowercase accepted, null body dropped
    #[test]
    fn parses_method_and_drops_null_body() {
        let params = CheckParams::from_dto(request("get")).unwrap();

        assert_eq!(params.method, Method::Get);
        assert!(params.body.is_none());
    }

    /// Tests rejection of methods outside the catalogue.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[test]
    fn rejects_unknown_method() {
        let result = CheckParams::from_dto(request("OPTIONS"));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
