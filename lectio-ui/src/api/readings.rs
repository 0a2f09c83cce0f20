//! Daily readings endpoint

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use tracing::info;

use lectio_common::calendar;

use crate::api::no_store_json;
use crate::error::ApiError;
use crate::services::FetchError;
use crate::AppState;

/// Query parameters for GET /api/readings
#[derive(Debug, Default, Deserialize)]
pub struct ReadingsQuery {
    /// ISO date; defaults to today
    pub date: Option<String>,
    /// Liturgical zone; defaults to the configured zone
    pub zone: Option<String>,
}

/// GET /api/readings?date=YYYY-MM-DD&zone=france
///
/// Fetches and normalizes the readings for one day. 503 when every
/// upstream candidate fails, with the last failure reason in the message.
pub async fn get_readings(
    State(state): State<AppState>,
    Query(query): Query<ReadingsQuery>,
) -> Result<Response, ApiError> {
    let date = match query.date.as_deref() {
        Some(raw) => calendar::parse_iso_date(raw)?,
        None => calendar::today(),
    };
    let zone = query
        .zone
        .unwrap_or_else(|| state.config.default_zone.clone());

    info!(date = %calendar::iso(date), zone = %zone, "📅 Readings requested");

    match state.client.fetch_readings(date, &zone).await {
        Ok(response) => Ok(no_store_json(response)),
        Err(error @ FetchError::AllEndpointsFailed { .. }) => {
            Err(ApiError::ServiceUnavailable(error.to_string()))
        }
        Err(error) => Err(ApiError::Internal(error.to_string())),
    }
}
