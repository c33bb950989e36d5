use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LlmModel {
    pub label: &'static str,
    pub value: &'static str,
}

/// An LLM provider and the models offered for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LlmProvider {
    pub label: &'static str,
    pub value: &'static str,
    pub models: &'static [LlmModel],
}

/// Model selected for the default pipeline
pub const DEFAULT_LLM_MODEL: &str = "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo";

pub const LLM_MODEL_CHOICES: &[LlmProvider] = &[
    LlmProvider {
        label: "Together AI",
        value: "together",
        models: &[
            LlmModel {
                label: "Meta Llama 3.1 70B Instruct Turbo",
                value: "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo",
            },
            LlmModel {
                label: "Meta Llama 3.1 8B Instruct Turbo",
                value: "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo",
            },
            LlmModel {
                label: "Meta Llama 3.1 405B Instruct Turbo",
                value: "meta-llama/Meta-Llama-3.1-405B-Instruct-Turbo",
            },
        ],
    },
    LlmProvider {
        label: "Anthropic",
        value: "anthropic",
        models: &[LlmModel {
            label: "Claude 3.5 Sonnet",
            value: "claude-3-5-sonnet-20240620",
        }],
    },
    LlmProvider {
        label: "Grok (x.ai)",
        value: "grok",
        models: &[LlmModel {
            label: "Grok Beta",
            value: "grok-beta",
        }],
    },
    LlmProvider {
        label: "Gemini",
        value: "gemini",
        models: &[
            LlmModel {
                label: "Gemini 1.5 Flash",
                value: "gemini-1.5-flash",
            },
            LlmModel {
                label: "Gemini 1.5 Pro",
                value: "gemini-1.0-pro",
            },
        ],
    },
    LlmProvider {
        label: "Open AI",
        value: "openai",
        models: &[
            LlmModel {
                label: "GPT-4o",
                value: "gpt-4o",
            },
            LlmModel {
                label: "GPT-4o Mini",
                value: "gpt-4o-mini",
            },
        ],
    },
];

pub fn find_provider(value: &str) -> Option<&'static LlmProvider> {
    LLM_MODEL_CHOICES.iter().find(|p| p.value == value)
}

/// Look up a model id across every provider
pub fn find_model(value: &str) -> Option<&'static LlmModel> {
    LLM_MODEL_CHOICES
        .iter()
        .flat_map(|p| p.models.iter())
        .find(|m| m.value == value.trim())
}
