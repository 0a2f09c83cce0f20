//! Integration tests for the lectio-ui HTTP API
//!
//! The router is exercised with `tower::util::ServiceExt::oneshot`;
//! upstream traffic goes to scripted local stub servers.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use lectio_common::config::Config;
use lectio_ui::{build_router, AppState};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

const VALID_PAYLOAD: &str = r#"{
    "informations": { "couleur": "blanc", "jour_liturgique_nom": "Dimanche de Pâques" },
    "messes": [ {
        "nom": "Messe du jour",
        "lectures": [
            { "type": "lecture_1", "reference": "Ac 10, 34a.37-43" },
            { "type": "psaume", "reference": "Ps 117" },
            { "type": "evangile", "reference": "Jn 20, 1-9" }
        ]
    } ]
}"#;

/// Test helper: stub upstream serving one fixed response
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

/// Test helper: app whose candidate endpoints are the given stub bases
fn setup_app(bases: Vec<String>) -> Router {
    let config = Config {
        mass_endpoints: bases
            .iter()
            .map(|base| format!("{}/{{date}}/{{zone}}", base))
            .collect(),
        office_endpoint: bases
            .first()
            .map(|base| format!("{}/{{office}}/{{date}}/{{zone}}", base))
            .unwrap_or_default(),
        fetch_timeout_ms: 2000,
        ..Config::default()
    };
    let state = AppState::new(config).expect("client should build");
    build_router(state)
}

/// Test helper: create GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("should read body");
    serde_json::from_slice(&bytes).expect("should parse JSON")
}

#[tokio::test]
async fn health_endpoint_reports_module() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "lectio-ui");
}

#[tokio::test]
async fn buildinfo_reports_version() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["git_hash"].is_string());
}

#[tokio::test]
async fn readings_round_trip() {
    let upstream = spawn_upstream(200, VALID_PAYLOAD).await;
    let app = setup_app(vec![upstream]);

    let response = app
        .oneshot(get("/api/readings?date=2026-04-05&zone=france"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );
    assert_eq!(response.headers().get(header::PRAGMA).unwrap(), "no-cache");

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["informations"]["couleur"], "blanc");
    // Upstream omitted temps_liturgique: the default applies
    assert_eq!(json["informations"]["temps_liturgique"], "ordinaire");
    assert_eq!(json["messes"][0]["id"], "messe0");
    assert_eq!(json["lectures"]["evangile"]["has_multiple_versions"], false);
    assert_eq!(
        json["lectures"]["psaume"]["versions"][0]["reference"],
        "Ps 117"
    );
}

#[tokio::test]
async fn malformed_date_is_a_bad_request() {
    let app = setup_app(vec![]);
    let response = app
        .oneshot(get("/api/readings?date=05/04/2026"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["error"], true);
    assert!(json["message"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn exhausted_candidates_surface_as_503() {
    let bad_1 = spawn_upstream(500, "boom").await;
    let bad_2 = spawn_upstream(502, "bad gateway").await;
    let app = setup_app(vec![bad_1, bad_2]);

    let response = app
        .oneshot(get("/api/readings?date=2026-04-05"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["error"], true);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Impossible de récupérer les lectures"));
    // The last attempt's failure is the surfaced reason
    assert!(message.contains("HTTP 502"), "message: {}", message);
}

#[tokio::test]
async fn unknown_office_is_rejected_without_upstream_calls() {
    let app = setup_app(vec![]);
    let response = app
        .oneshot(get("/api/offices/matines?date=2026-04-05"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = extract_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("Office inconnu"));
}

#[tokio::test]
async fn office_round_trip() {
    let upstream = spawn_upstream(
        200,
        r#"{
            "nom": "Laudes",
            "office": {
                "introduction": { "titre": "Introduction", "contenu": "<p>Seigneur, ouvre mes lèvres</p>" },
                "psaumes": [ { "titre": "Psaume 62", "contenu": "" } ]
            }
        }"#,
    )
    .await;
    let app = setup_app(vec![upstream]);

    let response = app
        .oneshot(get("/api/offices/laudes?date=2026-04-05"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["nom"], "Laudes");
    assert_eq!(json["sections"][0]["id"], "introduction");
    assert_eq!(json["sections"][1]["id"], "psaumes");
}

#[tokio::test]
async fn index_page_is_served() {
    let app = setup_app(vec![]);
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Lectio"));
    assert!(html.contains("/static/app.js"));
}
