//! Pipeline configuration handed to the voice bot orchestrator
//!
//! The orchestrator takes an ordered list of `{service, options}` entries plus
//! the bot profile, session limits and recording bucket. Nothing here talks to
//! the orchestrator; these are the request shapes it consumes.

use serde::Serialize;
use serde_json::{Value, json};

use super::languages::{Language, default_language};
use super::llm::DEFAULT_LLM_MODEL;
use super::prompt::DEFAULT_LLM_PROMPT;
use crate::config::ServerConfig;

/// Default bot profile name
pub const DEFAULT_BOT_PROFILE: &str = "voice_2024_10";

/// Maximum session length in seconds
pub const DEFAULT_MAX_DURATION: u32 = 360;

/// Seconds to silence before the VAD ends a turn
pub const DEFAULT_VAD_STOP_SECS: f64 = 0.7;

/// Provider names selected for each pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefaultServices {
    pub llm: &'static str,
    pub tts: &'static str,
    pub stt: &'static str,
}

pub const DEFAULT_SERVICES: DefaultServices = DefaultServices {
    llm: "together",
    tts: "cartesia",
    stt: "deepgram",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOption {
    pub name: String,
    pub value: Value,
}

impl ServiceOption {
    pub fn new(name: &str, value: Value) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Options for one pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceConfig {
    pub service: String,
    pub options: Vec<ServiceOption>,
}

impl ServiceConfig {
    pub fn new(service: &str, options: Vec<ServiceOption>) -> Self {
        Self {
            service: service.to_string(),
            options,
        }
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.iter().find(|o| o.name == name).map(|o| &o.value)
    }
}

/// Build the ordered vad → tts → llm → stt configuration
pub fn pipeline_config(
    language: &Language,
    llm_model: &str,
    system_prompt: &str,
) -> Vec<ServiceConfig> {
    vec![
        ServiceConfig::new(
            "vad",
            vec![ServiceOption::new(
                "params",
                json!({ "stop_secs": DEFAULT_VAD_STOP_SECS }),
            )],
        ),
        ServiceConfig::new(
            "tts",
            vec![
                ServiceOption::new("voice", json!(language.default_voice)),
                ServiceOption::new("model", json!(language.tts_model)),
                ServiceOption::new("language", json!(language.value)),
                ServiceOption::new(
                    "text_filter",
                    json!({ "filter_code": false, "filter_tables": false }),
                ),
            ],
        ),
        ServiceConfig::new(
            "llm",
            vec![
                ServiceOption::new("model", json!(llm_model)),
                ServiceOption::new(
                    "initial_messages",
                    json!([{ "role": "system", "content": system_prompt }]),
                ),
            ],
        ),
        ServiceConfig::new(
            "stt",
            vec![
                ServiceOption::new("model", json!(language.stt_model)),
                ServiceOption::new("language", json!(language.value)),
            ],
        ),
    ]
}

/// The pipeline used when a caller supplies no overrides
pub fn default_config() -> Vec<ServiceConfig> {
    pipeline_config(default_language(), DEFAULT_LLM_MODEL, DEFAULT_LLM_PROMPT)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingsBucket {
    pub assume_role_arn: Option<String>,
    pub bucket_name: Option<String>,
    pub bucket_region: Option<String>,
    pub allow_api_access: bool,
    pub allow_streaming_from_bucket: bool,
}

/// Where the video provider should write raw-track recordings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingSettings {
    #[serde(rename = "type")]
    pub kind: String,
    pub recordings_bucket: RecordingsBucket,
}

impl RecordingSettings {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            kind: "raw-tracks".to_string(),
            recordings_bucket: RecordingsBucket {
                assume_role_arn: config.recording_role_arn.clone(),
                bucket_name: config.recording_bucket.clone(),
                bucket_region: config.recording_region.clone(),
                allow_api_access: true,
                allow_streaming_from_bucket: true,
            },
        }
    }
}

/// Request body that starts a bot session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BotStartRequest {
    pub bot_profile: String,
    pub max_duration: u32,
    pub services: DefaultServices,
    pub config: Vec<ServiceConfig>,
    pub recording_settings: RecordingSettings,
}

impl BotStartRequest {
    pub fn from_defaults(recording_settings: RecordingSettings) -> Self {
        Self {
            bot_profile: DEFAULT_BOT_PROFILE.to_string(),
            max_duration: DEFAULT_MAX_DURATION,
            services: DEFAULT_SERVICES,
            config: default_config(),
            recording_settings,
        }
    }
}
