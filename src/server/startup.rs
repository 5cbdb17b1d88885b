use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, service::document::DocumentService, state::AppState};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`; when it is unset or unparsable, `info` is used.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Renders the Discord document and wraps it in the shared application state.
///
/// # Arguments
/// - `config` - Application configuration; its Discord API base URL becomes the document server
///
/// # Returns
/// - `AppState` - State holding the rendered document
pub fn build_state(config: &Config) -> AppState {
    let routes = schema::routes::all();
    let document = DocumentService::new(config.discord_api_base_url.as_str(), routes).build();

    tracing::info!(
        "Rendered Discord document: {} routes, {} schemas",
        routes.len(),
        schema::registry::entries().len()
    );

    AppState::new(document)
}

/// CORS policy: the configured origin only, or any origin when none is configured.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match &config.cors_allow_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the state carries the rendered document.
    ///
    /// Expected: one path entry at least and the default Discord server URL
    #[test]
    fn builds_state_with_document() {
        let config = Config::from_lookup(|_| None).unwrap();

        let state = build_state(&config);

        assert!(!state.document.paths.paths.is_empty());
        let servers = state.document.servers.as_ref().unwrap();
        assert_eq!(servers[0].url, "https://discord.com/api/v10");
    }
}
