use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use schema::ErrorResponse;
use serde_json::Value;

use crate::{
    model::catalogue::{SchemaListDto, SchemaSummaryDto, ValidationReportDto},
    server::{error::AppError, service::catalogue::SchemaService},
};

/// Tag for grouping schema registry endpoints in OpenAPI documentation
pub static SCHEMA_TAG: &str = "schemas";

/// List registered schemas.
///
/// # Returns
/// - `200 OK` - Every schema name, sorted, with whether bounds are checked beyond shape
#[utoipa::path(
    get,
    path = "/api/schemas",
    tag = SCHEMA_TAG,
    responses(
        (status = 200, description = "Registered schemas", body = SchemaListDto)
    ),
)]
pub async fn list_schemas() -> Result<impl IntoResponse, AppError> {
    let service = SchemaService::default();

    let schemas: Vec<SchemaSummaryDto> = service
        .list()
        .into_iter()
        .map(|entry| SchemaSummaryDto {
            name: entry.name.to_string(),
            constrained: entry.constrained,
        })
        .collect();
    let total = schemas.len();

    Ok((StatusCode::OK, Json(SchemaListDto { schemas, total })))
}

/// Validate a JSON payload against a named schema.
///
/// A non-conforming payload still answers 200; the report carries the failure tree in the
/// same shape Discord uses for `50035 Invalid Form Body`.
///
/// # Arguments
/// - `name` - Registry name of the schema, e.g. `MessageCreateRequest`
/// - `payload` - JSON document to validate
///
/// # Returns
/// - `200 OK` - Validation report
/// - `400 Bad Request` - Body is not JSON (code 50109)
/// - `404 Not Found` - No schema has this name
#[utoipa::path(
    post,
    path = "/api/schemas/{name}/validate",
    tag = SCHEMA_TAG,
    params(
        ("name" = String, Path, description = "Registry name of the schema")
    ),
    request_body(content = Object, description = "JSON document to validate"),
    responses(
        (status = 200, description = "Validation report", body = ValidationReportDto),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 404, description = "Unknown schema", body = ErrorResponse)
    ),
)]
pub async fn validate_schema(
    Path(name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::InvalidJson(rejection.body_text()))?;

    let service = SchemaService::default();

    let errors = service.validate(&name, &payload)?;

    let report = ValidationReportDto {
        schema: name,
        valid: errors.is_none(),
        errors,
    };

    Ok((StatusCode::OK, Json(report)))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::extract::FromRequest;
    use axum::http::Request;
    use axum::response::Response;
    use schema::error::INVALID_JSON;
    use test_utils::fixture;

    use super::*;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests the schema listing.
    ///
    /// Expected: 200 with sorted names including SnowflakeType
    #[tokio::test]
    async fn lists_schemas() {
        let response = list_schemas().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let list: SchemaListDto = body_json(response).await;
        assert_eq!(list.total, list.schemas.len());
        assert!(list.schemas.iter().any(|s| s.name == "SnowflakeType"));
        assert!(list.schemas.windows(2).all(|w| w[0].name < w[1].name));
    }

    /// Tests validating a conforming user fixture.
    ///
    /// Expected: 200 with valid report and no errors
    #[tokio::test]
    async fn validates_conforming_payload() {
        let response = validate_schema(
            Path("UserResponse".to_string()),
            Ok(Json(fixture::user::entity())),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let report: ValidationReportDto = body_json(response).await;
        assert!(report.valid);
        assert!(report.errors.is_none());
    }

    /// Tests validating a command name over the length limit.
    ///
    /// Expected: 200 with invalid report, BASE_TYPE_BAD_LENGTH at name
    #[tokio::test]
    async fn reports_failures() {
        let payload = fixture::command::entity_builder()
            .name("a".repeat(33))
            .build();

        let response = validate_schema(
            Path("ApplicationCommandCreateRequest".to_string()),
            Ok(Json(payload)),
        )
        .await
        .into_response();

        let report: ValidationReportDto = body_json(response).await;
        assert!(!report.valid);
        assert_eq!(
            report.errors.unwrap().codes_at(&["name"]),
            vec!["BASE_TYPE_BAD_LENGTH"]
        );
    }

    /// Tests validating against an unknown schema.
    ///
    /// Expected: 404
    #[tokio::test]
    async fn returns_not_found_for_unknown_schema() {
        let response = validate_schema(Path("Nope".to_string()), Ok(Json(Value::Null)))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests a body the JSON extractor rejects.
    ///
    /// Expected: 400 with code 50109
    #[tokio::test]
    async fn maps_invalid_json() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let payload = Json::<Value>::from_request(request, &()).await;

        let response = validate_schema(Path("UserResponse".to_string()), payload)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code, INVALID_JSON);
    }
}
