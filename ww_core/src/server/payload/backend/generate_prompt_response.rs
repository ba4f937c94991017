use serde::{Deserialize, Serialize};

/// Body of a single-prompt generation, live or served from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePromptResponse {
    pub genre: String,
    pub prompt: String,
    pub generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Why live generation failed when `fallback` is set:
    /// `unauthorized`, `rate_limited` or `upstream_error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GeneratePromptResponse {
    pub fn generated(genre: String, prompt: String, model: String) -> Self {
        GeneratePromptResponse {
            genre,
            prompt,
            generated: true,
            model: Some(model),
            fallback: None,
            message: None,
            reason: None,
        }
    }

    pub fn fallback(genre: String, prompt: String, reason: String) -> Self {
        GeneratePromptResponse {
            genre,
            prompt,
            generated: false,
            model: None,
            fallback: Some(true),
            message: Some("Using cached prompt due to API unavailability".to_string()),
            reason: Some(reason),
        }
    }
}
