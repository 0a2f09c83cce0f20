//! lectio-ui library - daily readings browser service
//!
//! Fetches the day's liturgical readings from the AELF API, normalizes
//! them into ordered reading groups and serves them (plus a small
//! embedded web UI) over HTTP.

use std::sync::Arc;

use axum::Router;
use lectio_common::config::Config;

pub mod api;
pub mod browser;
pub mod error;
pub mod model;
pub mod readings;
pub mod services;

use services::AelfClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved service configuration
    pub config: Arc<Config>,
    /// Upstream AELF client (connection pool, shared)
    pub client: AelfClient,
}

impl AppState {
    /// Create application state from resolved configuration
    pub fn new(config: Config) -> Result<Self, services::FetchError> {
        let config = Arc::new(config);
        let client = AelfClient::new(config.clone())?;
        Ok(Self { config, client })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::catch_panic::CatchPanicLayer;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/api/readings", get(api::get_readings))
        .route("/api/offices/:office", get(api::get_office))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Convert an unexpected handler panic into a structured 500
///
/// The process must never die because one day's payload hit an
/// unanticipated shape.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    use axum::response::IntoResponse;

    error::ApiError::Internal("Erreur interne inattendue".to_string()).into_response()
}
