use serde::Serialize;

/// A language the voice bot can hold a call in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Display name
    pub label: &'static str,
    /// ISO 639-1 code
    pub value: &'static str,
    /// Text-to-speech model id
    pub tts_model: &'static str,
    /// Speech-to-text model id
    pub stt_model: &'static str,
    /// Voice used when the caller does not pick one
    pub default_voice: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        label: "English",
        value: "en",
        tts_model: "sonic-english",
        stt_model: "nova-2-general",
        default_voice: "79a125e8-cd45-4c13-8a67-188112f4dd22",
    },
    Language {
        label: "French",
        value: "fr",
        tts_model: "sonic-multilingual",
        stt_model: "nova-2-general",
        default_voice: "a8a1eb38-5f15-4c1d-8722-7ac0f329727d",
    },
    Language {
        label: "Spanish",
        value: "es",
        tts_model: "sonic-multilingual",
        stt_model: "nova-2-general",
        default_voice: "846d6cb0-2301-48b6-9683-48f5618ea2f6",
    },
    Language {
        label: "German",
        value: "de",
        tts_model: "sonic-multilingual",
        stt_model: "nova-2-general",
        default_voice: "b9de4a89-2257-424b-94c2-db18ba68c81a",
    },
];

/// The language used when none is requested
pub fn default_language() -> &'static Language {
    &LANGUAGES[0]
}

/// Look up a language by code, case-insensitively
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|lang| lang.value.eq_ignore_ascii_case(code.trim()))
}
