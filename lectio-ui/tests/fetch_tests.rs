//! Integration tests for the AELF fetch adapter
//!
//! Each test points the client at scripted local stub servers, so the
//! candidate-fallback behavior is exercised over real HTTP without
//! touching the live API.

use axum::http::StatusCode;
use axum::Router;
use chrono::NaiveDate;
use lectio_common::config::Config;
use lectio_ui::services::{AelfClient, FetchError};
use std::sync::Arc;
use std::time::Duration;

const VALID_PAYLOAD: &str = r#"{
    "informations": { "jour_liturgique_nom": "Jeudi de la 18e semaine" },
    "messes": [ {
        "nom": "Messe du jour",
        "lectures": [
            { "type": "lecture_1", "reference": "Nb 20, 1-13" },
            { "type": "psaume", "reference": "Ps 94" },
            { "type": "evangile", "reference": "Mt 16, 13-23" }
        ]
    } ]
}"#;

/// Spawn a stub upstream serving a fixed response for every path
async fn spawn_upstream(status: u16, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move {
        (StatusCode::from_u16(status).unwrap(), body)
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Spawn a stub upstream that stalls longer than any test timeout
async fn spawn_slow_upstream() -> String {
    let app = Router::new().fallback(|| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        VALID_PAYLOAD
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(bases: Vec<String>, timeout_ms: u64) -> AelfClient {
    let config = Config {
        mass_endpoints: bases
            .into_iter()
            .map(|base| format!("{}/{{date}}/{{zone}}", base))
            .collect(),
        fetch_timeout_ms: timeout_ms,
        ..Config::default()
    };
    AelfClient::new(Arc::new(config)).unwrap()
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

#[tokio::test]
async fn first_healthy_candidate_wins() {
    let bad_1 = spawn_upstream(500, "boom").await;
    let bad_2 = spawn_upstream(500, "boom").await;
    let good = spawn_upstream(200, VALID_PAYLOAD).await;

    let client = client_for(vec![bad_1, bad_2, good], 2000);
    let response = client.fetch_readings(test_date(), "france").await.unwrap();

    // Prior failures are swallowed; the caller only sees the good payload
    assert_eq!(response.messes.len(), 1);
    assert!(response.lectures.get("lecture_1").is_some());
    assert!(response.lectures.get("evangile").is_some());
}

#[tokio::test]
async fn malformed_json_advances_to_next_candidate() {
    let malformed = spawn_upstream(200, "<html>not json</html>").await;
    let good = spawn_upstream(200, VALID_PAYLOAD).await;

    let client = client_for(vec![malformed, good], 2000);
    assert!(client.fetch_readings(test_date(), "france").await.is_ok());
}

#[tokio::test]
async fn empty_object_advances_to_next_candidate() {
    let empty = spawn_upstream(200, "{}").await;
    let good = spawn_upstream(200, VALID_PAYLOAD).await;

    let client = client_for(vec![empty, good], 2000);
    assert!(client.fetch_readings(test_date(), "france").await.is_ok());
}

#[tokio::test]
async fn content_failure_is_treated_like_a_transient_failure() {
    // Valid JSON with no usable masses must not be a vacuous success
    let no_content = spawn_upstream(200, r#"{"informations":{},"messes":[]}"#).await;
    let good = spawn_upstream(200, VALID_PAYLOAD).await;

    let client = client_for(vec![no_content, good], 2000);
    let response = client.fetch_readings(test_date(), "france").await.unwrap();
    assert!(!response.messes.is_empty());
}

#[tokio::test]
async fn timeout_advances_to_next_candidate() {
    let slow = spawn_slow_upstream().await;
    let good = spawn_upstream(200, VALID_PAYLOAD).await;

    let client = client_for(vec![slow, good], 300);
    assert!(client.fetch_readings(test_date(), "france").await.is_ok());
}

#[tokio::test]
async fn terminal_failure_carries_the_last_error() {
    let bad_1 = spawn_upstream(500, "boom").await;
    let malformed = spawn_upstream(200, "not json at all").await;

    let client = client_for(vec![bad_1, malformed], 2000);
    let error = client
        .fetch_readings(test_date(), "france")
        .await
        .unwrap_err();

    match &error {
        FetchError::AllEndpointsFailed { last } => {
            // The last attempt was the malformed one
            assert!(last.contains("Réponse invalide"), "last error: {}", last);
        }
        other => panic!("expected AllEndpointsFailed, got {:?}", other),
    }
    assert!(error
        .to_string()
        .contains("Impossible de récupérer les lectures"));
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let empty = spawn_upstream(200, "").await;

    let client = client_for(vec![empty], 2000);
    let error = client
        .fetch_readings(test_date(), "france")
        .await
        .unwrap_err();
    match error {
        FetchError::AllEndpointsFailed { last } => assert_eq!(last, "Réponse vide"),
        other => panic!("expected AllEndpointsFailed, got {:?}", other),
    }
}
