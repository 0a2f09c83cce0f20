//! AELF API client
//!
//! Fetches the day's readings from an ordered list of candidate
//! endpoints. Each attempt is bounded by the configured timeout; any
//! failure (network, non-2xx, empty body, malformed JSON, empty object,
//! or a payload that normalizes to nothing) advances to the next
//! candidate. Only when every candidate fails does the caller see an
//! error, carrying the last attempt's failure reason. No retries beyond
//! the candidate list itself.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use lectio_common::calendar;
use lectio_common::config::Config;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{NormalizedResponse, RawMassResponse};
use crate::readings::office::{build_office_view, OfficeView, RawOffice};
use crate::readings::shape::build_response;

const USER_AGENT: &str = concat!("Lectio/", env!("CARGO_PKG_VERSION"));

/// Upstream fetch errors
///
/// All variants except [`FetchError::AllEndpointsFailed`] are recovered
/// internally by advancing to the next candidate endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Erreur réseau: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Réponse vide")]
    EmptyBody,

    #[error("Réponse invalide: {0}")]
    Parse(String),

    #[error("Données vides")]
    EmptyPayload,

    /// Valid JSON but nothing usable after normalization
    #[error("Aucune lecture disponible")]
    NoContent,

    /// Terminal failure: every candidate endpoint failed
    #[error("Impossible de récupérer les lectures ({last})")]
    AllEndpointsFailed { last: String },
}

/// AELF API client
#[derive(Clone)]
pub struct AelfClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl AelfClient {
    pub fn new(config: Arc<Config>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(config.fetch_timeout_ms))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Fetch and normalize the readings for one (date, zone)
    ///
    /// Tries each configured candidate endpoint in order and returns the
    /// first normalized non-empty response.
    pub async fn fetch_readings(
        &self,
        date: NaiveDate,
        zone: &str,
    ) -> Result<NormalizedResponse, FetchError> {
        let mut last_error: Option<FetchError> = None;

        for template in &self.config.mass_endpoints {
            let url = expand_template(template, date, zone, None);
            debug!(url = %url, "Trying candidate endpoint");

            let attempt = async {
                let value = self.get_json(&url).await?;
                let raw: RawMassResponse = serde_json::from_value(value)
                    .map_err(|e| FetchError::Parse(e.to_string()))?;
                build_response(raw, date, zone).map_err(|_| FetchError::NoContent)
            };

            match attempt.await {
                Ok(response) => {
                    info!(url = %url, date = %calendar::iso(date), "✓ Readings retrieved");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Candidate endpoint failed");
                    last_error = Some(e);
                }
            }
        }

        Err(FetchError::AllEndpointsFailed {
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "erreur inconnue".to_string()),
        })
    }

    /// Fetch and assemble one office of the hours
    pub async fn fetch_office(
        &self,
        office: &str,
        date: NaiveDate,
        zone: &str,
    ) -> Result<OfficeView, FetchError> {
        let url = expand_template(&self.config.office_endpoint, date, zone, Some(office));
        debug!(url = %url, "Fetching office");

        let attempt = async {
            let value = self.get_json(&url).await?;
            let raw: RawOffice =
                serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))?;
            build_office_view(raw, office).map_err(|_| FetchError::NoContent)
        };

        match attempt.await {
            Ok(view) => {
                info!(url = %url, office = %office, "✓ Office retrieved");
                Ok(view)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Office fetch failed");
                Err(FetchError::AllEndpointsFailed {
                    last: e.to_string(),
                })
            }
        }
    }

    /// One GET attempt: 2xx status, non-empty body, JSON, non-empty object
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|_| FetchError::Parse(truncate(&body, 100).to_string()))?;

        match value.as_object() {
            Some(object) if !object.is_empty() => Ok(value),
            _ => Err(FetchError::EmptyPayload),
        }
    }
}

/// Substitute `{date}`, `{zone}` and `{office}` placeholders
fn expand_template(template: &str, date: NaiveDate, zone: &str, office: Option<&str>) -> String {
    let mut url = template
        .replace("{date}", &calendar::iso(date))
        .replace("{zone}", zone);
    if let Some(office) = office {
        url = url.replace("{office}", office);
    }
    url
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
