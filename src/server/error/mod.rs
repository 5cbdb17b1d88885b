//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by handlers and by startup. Every error reaching a
//! client is rendered in Discord's own `ErrorResponse` shape, so clients of this service parse
//! failures the same way they parse Discord's.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schema::error::{ErrorResponse, GENERAL_ERROR, INVALID_JSON};
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Socket or listener failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// The request body is not JSON.
    ///
    /// Results in 400 Bad Request with Discord's invalid JSON code. The parser's message is
    /// logged, not returned.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` (code 0) and `InvalidJson` (code 50109)
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(GENERAL_ERROR, msg)),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(GENERAL_ERROR, msg)),
            )
                .into_response(),
            Self::InvalidJson(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(
                        INVALID_JSON,
                        "The request body contains invalid JSON.",
                    )),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details do not reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(GENERAL_ERROR, "500: Internal Server Error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests that not found errors use Discord's body shape.
    ///
    /// Expected: 404 with code 0 and the message passed through
    #[tokio::test]
    async fn not_found_renders_error_response() {
        let response = AppError::NotFound("404: Not Found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.code, GENERAL_ERROR);
        assert_eq!(body.message, "404: Not Found");
    }

    /// Tests that invalid JSON maps to code 50109 without leaking parser output.
    ///
    /// Expected: 400 with code 50109 and a fixed message
    #[tokio::test]
    async fn invalid_json_uses_discord_code() {
        let response = AppError::InvalidJson("EOF while parsing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.code, INVALID_JSON);
        assert!(!body.message.contains("EOF"));
    }

    /// Tests that internal errors are masked.
    ///
    /// Expected: 500 with a generic message
    #[tokio::test]
    async fn internal_errors_are_masked() {
        let response = AppError::IoErr(std::io::Error::other("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.message, "500: Internal Server Error");
        assert!(!body.message.contains("secret"));
    }
}
