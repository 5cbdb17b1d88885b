use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SecurityDto {
    /// One of `none`, `bot`, `oauth2` or `bot_or_oauth2`.
    pub kind: String,
    pub schemes: Vec<String>,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParamDto {
    pub name: String,
    /// Value constraint, e.g. `snowflake`, `integer 1..=100` or `string`.
    pub kind: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BodyDto {
    pub schema: String,
    pub list: bool,
    pub content_types: Vec<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResponseDto {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub list: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteSummaryDto {
    pub operation_id: String,
    pub method: String,
    pub path: String,
    pub tag: String,
    pub summary: String,
    pub security: SecurityDto,
    pub path_params: Vec<ParamDto>,
    pub query: Vec<ParamDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyDto>,
    pub responses: Vec<ResponseDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteListDto {
    pub routes: Vec<RouteSummaryDto>,
    pub total: usize,
}
