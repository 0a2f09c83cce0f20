//! Liturgy of the hours endpoint

use axum::extract::{Path, Query, State};
use axum::response::Response;
use tracing::info;

use lectio_common::calendar;

use crate::api::no_store_json;
use crate::api::readings::ReadingsQuery;
use crate::error::ApiError;
use crate::readings::KNOWN_OFFICES;
use crate::AppState;

/// GET /api/offices/:office?date=YYYY-MM-DD&zone=france
///
/// Unknown office names are a 400: they cannot succeed against any
/// endpoint, so they are the caller's error, not an upstream outage.
pub async fn get_office(
    State(state): State<AppState>,
    Path(office): Path<String>,
    Query(query): Query<ReadingsQuery>,
) -> Result<Response, ApiError> {
    if !KNOWN_OFFICES.contains(&office.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "Office inconnu: {} (attendu: {})",
            office,
            KNOWN_OFFICES.join(", ")
        )));
    }

    let date = match query.date.as_deref() {
        Some(raw) => calendar::parse_iso_date(raw)?,
        None => calendar::today(),
    };
    let zone = query
        .zone
        .unwrap_or_else(|| state.config.default_zone.clone());

    info!(office = %office, date = %calendar::iso(date), zone = %zone, "Office requested");

    match state.client.fetch_office(&office, date, &zone).await {
        Ok(view) => Ok(no_store_json(view)),
        Err(error) => Err(ApiError::ServiceUnavailable(error.to_string())),
    }
}
