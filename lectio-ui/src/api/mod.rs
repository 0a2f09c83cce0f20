//! HTTP API handlers for lectio-ui

pub mod buildinfo;
pub mod health;
pub mod offices;
pub mod readings;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use offices::get_office;
pub use readings::get_readings;
pub use ui::{serve_app_js, serve_index};

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON response with caching disabled
///
/// Content is date-keyed and must never be served stale by an
/// intermediary cache.
pub(crate) fn no_store_json<T: Serialize>(payload: T) -> Response {
    (
        [
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate",
            ),
            (header::PRAGMA, "no-cache"),
        ],
        Json(payload),
    )
        .into_response()
}
