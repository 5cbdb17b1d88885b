use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{error::AppError, state::AppState};

/// Tag for grouping Discord document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Get the Discord API OpenAPI document.
///
/// The document is rendered once at startup from the route catalogue and schema registry,
/// with the configured Discord API base URL as its server.
///
/// # Arguments
/// - `state` - Application state holding the rendered document
///
/// # Returns
/// - `200 OK` - OpenAPI 3.1 document
#[utoipa::path(
    get,
    path = "/api/discord/openapi.json",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "OpenAPI 3.1 document of the Discord API", content_type = "application/json")
    ),
)]
pub async fn get_document(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(state.document.as_ref().clone())))
}
