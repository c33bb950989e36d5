//! Server Startup Tests
//!
//! Tests for state construction, route wiring and the read-only catalog endpoints.

use std::net::TcpListener;

use axum::{Router, body::Body, http::Request};
use tower::util::ServiceExt;

use bearhug_gateway::{ServerConfig, handlers, routes, state::AppState};

/// Helper function to create a minimal test configuration
fn create_minimal_config(port: u16) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
        tls: None,
        supabase_url: None,
        supabase_key: None,
        calls_table: "calls".to_string(),
        store_timeout_seconds: 10,
        recording_role_arn: None,
        recording_bucket: None,
        recording_region: None,
        cors_allowed_origins: None,
        rate_limit_requests_per_second: 60,
        rate_limit_burst_size: 10,
    }
}

/// Find an available port for testing
fn find_available_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn full_router(app_state: std::sync::Arc<AppState>) -> Router {
    Router::new()
        .route("/", axum::routing::get(handlers::api::health_check))
        .merge(routes::api::create_api_router())
        .with_state(app_state)
}

async fn get_json(app: &Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// The server boots without any Supabase credentials
#[tokio::test]
async fn test_minimal_config_boot() {
    let config = create_minimal_config(find_available_port());
    let app_state = AppState::new(config).await;
    assert!(app_state.call_store.is_none());

    let app = full_router(app_state);
    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "OK" }));
}

/// Credentials produce a Supabase-backed store
#[tokio::test]
async fn test_supabase_store_created_with_credentials() {
    let mut config = create_minimal_config(find_available_port());
    config.supabase_url = Some("https://xyzcompany.supabase.co".to_string());
    config.supabase_key = Some("anon-key".to_string());

    let app_state = AppState::new(config).await;

    let store = app_state.call_store.as_ref().expect("store should be built");
    assert_eq!(store.name(), "supabase");
}

/// An unparseable project URL leaves the store unset instead of failing startup
#[tokio::test]
async fn test_invalid_supabase_url_does_not_abort() {
    let mut config = create_minimal_config(find_available_port());
    config.supabase_url = Some("not a url".to_string());
    config.supabase_key = Some("anon-key".to_string());

    let app_state = AppState::new(config).await;

    assert!(app_state.call_store.is_none());
}

/// Without credentials the endpoint reports the fixed message
#[tokio::test]
async fn test_store_endpoint_without_credentials() {
    let app_state = AppState::new(create_minimal_config(find_available_port())).await;
    let app = full_router(app_state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/store-s3-data")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"roomUrl":"https://bearhug.daily.co/abc"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Missing Supabase credentials");
}

#[tokio::test]
async fn test_catalog_languages_route() {
    let app = full_router(AppState::new(create_minimal_config(find_available_port())).await);

    let (status, body) = get_json(&app, "/api/catalog/languages").await;

    assert_eq!(status, axum::http::StatusCode::OK);
    let languages = body.as_array().unwrap();
    assert_eq!(languages.len(), 4);
    assert_eq!(languages[0]["value"], "en");
    assert_eq!(languages[0]["tts_model"], "sonic-english");
}

#[tokio::test]
async fn test_catalog_services_and_models_routes() {
    let app = full_router(AppState::new(create_minimal_config(find_available_port())).await);

    let (_, services) = get_json(&app, "/api/catalog/services").await;
    assert_eq!(
        services,
        serde_json::json!({ "llm": "together", "tts": "cartesia", "stt": "deepgram" })
    );

    let (_, providers) = get_json(&app, "/api/catalog/llm-models").await;
    assert_eq!(providers[0]["value"], "together");
    assert!(!providers[0]["models"].as_array().unwrap().is_empty());

    let (_, characters) = get_json(&app, "/api/catalog/characters").await;
    assert_eq!(characters[0]["name"], "Default");
}

#[tokio::test]
async fn test_catalog_pipeline_route() {
    let app = full_router(AppState::new(create_minimal_config(find_available_port())).await);

    let (status, body) = get_json(&app, "/api/catalog/pipeline").await;
    assert_eq!(status, axum::http::StatusCode::OK);
    let services: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["service"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(services, vec!["vad", "tts", "llm", "stt"]);

    let (status, body) = get_json(&app, "/api/catalog/pipeline?language=es&llm_model=gpt-4o").await;
    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body[2]["options"][0]["value"], "gpt-4o");
    assert_eq!(body[3]["options"][1]["value"], "es");

    let (status, body) = get_json(&app, "/api/catalog/pipeline?language=xx").await;
    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown language: xx");

    let (status, body) = get_json(&app, "/api/catalog/pipeline?llm_model=gpt-2").await;
    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown LLM model: gpt-2");
}

/// Recording bucket settings flow from configuration into the bot request
#[tokio::test]
async fn test_catalog_bot_request_route() {
    let mut config = create_minimal_config(find_available_port());
    config.recording_role_arn = Some("arn:aws:iam::123456789012:role/daily".to_string());
    config.recording_bucket = Some("bearhug-recordings".to_string());
    config.recording_region = Some("us-west-2".to_string());
    let app = full_router(AppState::new(config).await);

    let (status, body) = get_json(&app, "/api/catalog/bot-request").await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["bot_profile"], "voice_2024_10");
    assert_eq!(body["max_duration"], 360);
    let bucket = &body["recording_settings"]["recordings_bucket"];
    assert_eq!(bucket["bucket_name"], "bearhug-recordings");
    assert_eq!(bucket["bucket_region"], "us-west-2");
    assert_eq!(bucket["allow_api_access"], true);
}

/// Test that the server correctly parses addresses
#[test]
fn test_address_parsing() {
    let port = find_available_port();
    let config = create_minimal_config(port);

    let address = config.address();
    assert_eq!(address, format!("127.0.0.1:{port}"));
}
