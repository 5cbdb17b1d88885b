use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use schema::{routes, ErrorResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::route::{RouteListDto, RouteSummaryDto},
    server::{error::AppError, service::route::RouteService},
};

/// Tag for grouping route catalogue endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "routes";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteFilterParams {
    /// Only list routes of this API area, e.g. `Channels` (case-insensitive)
    pub tag: Option<String>,
}

/// List catalogued Discord routes.
///
/// Returns every route descriptor in catalogue order, optionally restricted to one tag.
///
/// # Arguments
/// - `params` - Optional tag filter
///
/// # Returns
/// - `200 OK` - Matching route summaries and their count
#[utoipa::path(
    get,
    path = "/api/routes",
    tag = ROUTE_TAG,
    params(RouteFilterParams),
    responses(
        (status = 200, description = "Route summaries", body = RouteListDto)
    ),
)]
pub async fn list_routes(
    Query(params): Query<RouteFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RouteService::new(routes::all());

    let routes: Vec<RouteSummaryDto> = service
        .list(params.tag.as_deref())
        .into_iter()
        .map(RouteSummaryDto::from)
        .collect();
    let total = routes.len();

    Ok((StatusCode::OK, Json(RouteListDto { routes, total })))
}

/// Get one catalogued route by operation id.
///
/// # Arguments
/// - `operation_id` - Operation id, e.g. `create_message`
///
/// # Returns
/// - `200 OK` - Route summary
/// - `404 Not Found` - No route has this operation id
#[utoipa::path(
    get,
    path = "/api/routes/{operation_id}",
    tag = ROUTE_TAG,
    params(
        ("operation_id" = String, Path, description = "Operation id of the route")
    ),
    responses(
        (status = 200, description = "Route summary", body = RouteSummaryDto),
        (status = 404, description = "Unknown operation id", body = ErrorResponse)
    ),
)]
pub async fn get_route(Path(operation_id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let service = RouteService::new(routes::all());

    let route = service.get(&operation_id)?;

    Ok((StatusCode::OK, Json(RouteSummaryDto::from(route))))
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::response::Response;

    use super::*;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests listing routes filtered by tag.
    ///
    /// Expected: 200 with only Gateway routes and a matching total
    #[tokio::test]
    async fn lists_routes_by_tag() {
        let params = RouteFilterParams {
            tag: Some("gateway".to_string()),
        };

        let response = list_routes(Query(params)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let list: RouteListDto = body_json(response).await;
        assert_eq!(list.total, 2);
        assert!(list.routes.iter().all(|route| route.tag == "Gateway"));
    }

    /// Tests fetching an unknown route.
    ///
    /// Expected: 404 with a Discord-shaped error body
    #[tokio::test]
    async fn returns_not_found_for_unknown_route() {
        let response = get_route(Path("nope".to_string())).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code, 0);
    }
}
