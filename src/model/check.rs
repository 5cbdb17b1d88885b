use std::collections::BTreeMap;

use schema::ErrorDetails;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A request to check against the route catalogue without sending it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckRequestDto {
    pub method: String,
    /// Path relative to the API base, with or without the `/api/v10` prefix. A query string or
    /// a full URL is accepted too.
    pub path: String,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckReportDto {
    pub operation_id: String,
    pub method: String,
    pub path_template: String,
    pub params: BTreeMap<String, String>,
    pub valid: bool,
    /// Failures keyed by location: `path`, `query` and `body`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}
