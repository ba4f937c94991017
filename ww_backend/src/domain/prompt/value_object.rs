use crate::error::ErrorBackend;
use ww_core::server::payload::backend::generate_prompt_response::GeneratePromptResponse;

/// How a single generation call is issued upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Single,
    Streaming,
    Batch(usize),
}

/// Lives for one handler invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub genre: String,
    pub mode: GenerationMode,
}

impl GenerationRequest {
    pub fn new(genre: impl Into<String>, mode: GenerationMode) -> Self {
        GenerationRequest {
            genre: genre.into(),
            mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    Unauthorized,
    RateLimited,
    UpstreamError,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::Unauthorized => "unauthorized",
            FallbackReason::RateLimited => "rate_limited",
            FallbackReason::UpstreamError => "upstream_error",
        }
    }
}

impl From<&ErrorBackend> for FallbackReason {
    fn from(err: &ErrorBackend) -> Self {
        match err {
            ErrorBackend::Unauthorized => FallbackReason::Unauthorized,
            ErrorBackend::RateLimited => FallbackReason::RateLimited,
            _ => FallbackReason::UpstreamError,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePromptOutput {
    Generated {
        genre: String,
        prompt: String,
        model: String,
    },
    Fallback {
        genre: String,
        prompt: String,
        reason: FallbackReason,
    },
}

impl GeneratePromptOutput {
    pub fn prompt(&self) -> &str {
        match self {
            GeneratePromptOutput::Generated { prompt, .. }
            | GeneratePromptOutput::Fallback { prompt, .. } => prompt,
        }
    }
}

impl From<GeneratePromptOutput> for GeneratePromptResponse {
    fn from(output: GeneratePromptOutput) -> Self {
        match output {
            GeneratePromptOutput::Generated {
                genre,
                prompt,
                model,
            } => GeneratePromptResponse::generated(genre, prompt, model),
            GeneratePromptOutput::Fallback {
                genre,
                prompt,
                reason,
            } => GeneratePromptResponse::fallback(genre, prompt, reason.as_str().to_string()),
        }
    }
}
