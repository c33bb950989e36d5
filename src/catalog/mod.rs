//! Static configuration consumed by the voice bot pipeline
//!
//! Language, voice and model catalogs, preset characters, prompt templates and
//! the default pipeline configuration. These are served read-only over HTTP and
//! used verbatim by the orchestrator.

use std::time::Duration;

pub mod characters;
pub mod languages;
pub mod llm;
pub mod pipeline;
pub mod prompt;

pub use characters::{PRESET_CHARACTERS, PresetCharacter, find_character};
pub use languages::{LANGUAGES, Language, default_language, find_language};
pub use llm::{DEFAULT_LLM_MODEL, LLM_MODEL_CHOICES, LlmModel, LlmProvider, find_model, find_provider};
pub use pipeline::{
    BotStartRequest, DEFAULT_BOT_PROFILE, DEFAULT_MAX_DURATION, DEFAULT_SERVICES,
    DefaultServices, RecordingSettings, RecordingsBucket, ServiceConfig, ServiceOption,
    default_config, pipeline_config,
};
pub use prompt::{DEFAULT_LLM_PROMPT, PromptError, ServiceCategory, render_prompt};

/// How long a client waits for the bot to report ready
pub const BOT_READY_TIMEOUT: Duration = Duration::from_secs(15);
