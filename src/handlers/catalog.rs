//! Read-only catalog endpoints
//!
//! These expose the static bot configuration so front ends and the
//! orchestrator read the same values the gateway was built with.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::catalog::{
    BotStartRequest, DEFAULT_LLM_MODEL, DEFAULT_LLM_PROMPT, DEFAULT_SERVICES, DefaultServices,
    LANGUAGES, LLM_MODEL_CHOICES, Language, LlmProvider, PRESET_CHARACTERS, PresetCharacter,
    ServiceConfig, default_language, find_language, find_model, pipeline_config,
};
use crate::state::AppState;

pub async fn list_languages() -> Json<&'static [Language]> {
    Json(LANGUAGES)
}

pub async fn default_services() -> Json<DefaultServices> {
    Json(DEFAULT_SERVICES)
}

pub async fn list_llm_models() -> Json<&'static [LlmProvider]> {
    Json(LLM_MODEL_CHOICES)
}

pub async fn list_characters() -> Json<&'static [PresetCharacter]> {
    Json(PRESET_CHARACTERS)
}

#[derive(Debug, Default, Deserialize)]
pub struct PipelineQuery {
    /// Language code, defaults to English
    pub language: Option<String>,
    pub llm_model: Option<String>,
}

/// Pipeline configuration, optionally for another language or model
///
/// Unknown language codes and model ids both answer 404.
pub async fn pipeline(Query(query): Query<PipelineQuery>) -> Response {
    let language = match query.language.as_deref() {
        Some(code) => match find_language(code) {
            Some(language) => language,
            None => {
                debug!("Unknown pipeline language requested: {}", code);
                return not_found(format!("Unknown language: {code}"));
            }
        },
        None => default_language(),
    };
    let llm_model = match query.llm_model.as_deref() {
        Some(value) => match find_model(value) {
            Some(model) => model.value,
            None => {
                debug!("Unknown pipeline LLM model requested: {}", value);
                return not_found(format!("Unknown LLM model: {value}"));
            }
        },
        None => DEFAULT_LLM_MODEL,
    };

    let config: Vec<ServiceConfig> = pipeline_config(language, llm_model, DEFAULT_LLM_PROMPT);
    Json(config).into_response()
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

/// Default bot start request with this deployment's recording bucket
pub async fn bot_request(State(state): State<Arc<AppState>>) -> Json<BotStartRequest> {
    Json(BotStartRequest::from_defaults(state.config.recording_settings()))
}
