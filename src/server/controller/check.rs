use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use schema::ErrorResponse;

use crate::{
    model::check::{CheckReportDto, CheckRequestDto},
    server::{error::AppError, model::check::CheckParams, service::check::CheckService},
};

/// Tag for grouping request checking endpoints in OpenAPI documentation
pub static CHECK_TAG: &str = "check";

/// Check a described Discord request without sending it.
///
/// Resolves the method and path to a catalogued route, then checks path parameters, query
/// parameters, the content type and the body against it. Failures are grouped under `path`,
/// `query` and `body` in the report's error tree.
///
/// # Arguments
/// - `payload` - The request to check
///
/// # Returns
/// - `200 OK` - Check report, `valid` when nothing failed
/// - `400 Bad Request` - Unsupported method, unusable path or a body that is not JSON
/// - `404 Not Found` - No route serves this method and path
#[utoipa::path(
    post,
    path = "/api/check",
    tag = CHECK_TAG,
    request_body = CheckRequestDto,
    responses(
        (status = 200, description = "Check report", body = CheckReportDto),
        (status = 400, description = "Malformed check request", body = ErrorResponse),
        (status = 404, description = "No matching route", body = ErrorResponse)
    ),
)]
pub async fn check_request(
    payload: Result<Json<CheckRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::InvalidJson(rejection.body_text()))?;

    let params = CheckParams::from_dto(payload)?;

    let outcome = CheckService::new().check(params)?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::body::to_bytes;
    use axum::response::Response;
    use test_utils::fixture;

    use super::*;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn request(method: &str, path: &str, body: Option<serde_json::Value>) -> CheckRequestDto {
        CheckRequestDto {
            method: method.to_string(),
            path: path.to_string(),
            query: BTreeMap::new(),
            content_type: None,
            body,
        }
    }

    /// Tests checking a conforming message post.
    ///
    /// Expected: 200, valid, create_message with its channel_id
    #[tokio::test]
    async fn reports_conforming_request() {
        let dto = request(
            "POST",
            "/api/v10/channels/41771983423143937/messages",
            Some(fixture::message::create_request()),
        );

        let response = check_request(Ok(Json(dto))).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let report: CheckReportDto = body_json(response).await;
        assert!(report.valid);
        assert_eq!(report.operation_id, "create_message");
        assert_eq!(report.path_template, "/channels/{channel_id}/messages");
        assert_eq!(report.params["channel_id"], "41771983423143937");
    }

    /// Tests the current-user route against the user_id template.
    ///
    /// Expected: get_my_user chosen, no params captured
    #[tokio::test]
    async fn prefers_literal_segments() {
        let response = check_request(Ok(Json(request("get", "/users/@me", None))))
            .await
            .into_response();

        let report: CheckReportDto = body_json(response).await;
        assert_eq!(report.operation_id, "get_my_user");
        assert!(report.params.is_empty());
    }

    /// Tests a body that fails validation.
    ///
    /// Expected: 200, invalid, failures under body
    #[tokio::test]
    async fn reports_body_failures() {
        let dto = request(
            "POST",
            "/applications/41771983423143937/commands",
            Some(serde_json::json!({ "name": "", "description": "Replies with pong" })),
        );

        let response = check_request(Ok(Json(dto))).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let report: CheckReportDto = body_json(response).await;
        assert!(!report.valid);
        assert_eq!(
            report.errors.unwrap().codes_at(&["body", "name"]),
            vec!["BASE_TYPE_BAD_LENGTH"]
        );
    }

    /// Tests unsupported methods and unknown routes.
    ///
    /// Expected: 400 for OPTIONS, 404 for an unknown path
    #[tokio::test]
    async fn rejects_unusable_requests() {
        let response = check_request(Ok(Json(request("OPTIONS", "/gateway", None))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = check_request(Ok(Json(request("GET", "/not/a/route", None))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.message, "404: Not Found");
    }
}
