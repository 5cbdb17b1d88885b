use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::{Config as SwaggerConfig, SwaggerUi, Url};

use crate::server::{
    controller::{
        catalogue::{self, SCHEMA_TAG},
        check::{self, CHECK_TAG},
        document::{self, DOCUMENT_TAG},
        route::{self, ROUTE_TAG},
    },
    state::AppState,
};

const API_DOC_URL: &str = "/api/openapi.json";
const DISCORD_DOC_URL: &str = "/api/discord/openapi.json";

/// Document describing this service's own endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Discord OpenAPI catalogue",
        description = "Publishes the Discord REST API contract and checks payloads against it."
    ),
    tags(
        (name = DOCUMENT_TAG, description = "The rendered Discord API document"),
        (name = ROUTE_TAG, description = "Catalogued Discord routes"),
        (name = SCHEMA_TAG, description = "Registered Discord schemas and payload validation"),
        (name = CHECK_TAG, description = "Checking described requests against the catalogue")
    )
)]
pub struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(document::get_document))
        .routes(routes!(route::list_routes))
        .routes(routes!(route::get_route))
        .routes(routes!(catalogue::list_schemas))
        .routes(routes!(catalogue::validate_schema))
        .routes(routes!(check::check_request))
}

/// API routes plus Swagger UI listing this service's document and the Discord document.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    let swagger = SwaggerUi::new("/swagger-ui")
        .url(API_DOC_URL, api)
        .config(SwaggerConfig::new([
            Url::new("Catalogue service", API_DOC_URL),
            Url::with_primary("Discord API v10", DISCORD_DOC_URL, true),
        ]));

    router.merge(swagger)
}
