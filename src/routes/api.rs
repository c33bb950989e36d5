use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{calls, catalog};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router
///
/// The health check lives outside this router and is mounted in main.rs.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/store-s3-data", post(calls::store_s3_data))
        // Static bot configuration
        .route("/api/catalog/languages", get(catalog::list_languages))
        .route("/api/catalog/services", get(catalog::default_services))
        .route("/api/catalog/llm-models", get(catalog::list_llm_models))
        .route("/api/catalog/characters", get(catalog::list_characters))
        .route("/api/catalog/pipeline", get(catalog::pipeline))
        .route("/api/catalog/bot-request", get(catalog::bot_request))
        .layer(TraceLayer::new_for_http())
}
