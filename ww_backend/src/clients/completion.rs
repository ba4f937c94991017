use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::Serialize;
use std::fmt::Debug;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ROLE_SYSTEM,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ROLE_USER,
            content: content.into(),
        }
    }
}

/// Body of an OpenAI-compatible `chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

/// Incremental text fragments of a streamed completion.
pub type FragmentStream = BoxStream<'static, Result<String>>;

/// The external text-generation service.
///
/// Implementations report a rejected credential as
/// [`ErrorBackend::Unauthorized`](crate::error::ErrorBackend::Unauthorized),
/// throttling as `RateLimited` and everything else as `UpstreamError`.
/// Exactly one upstream attempt is made per call.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    /// Buffered completion; returns the message content of the first choice.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Streamed completion; errors opening the stream are returned directly,
    /// errors after that arrive as items of the stream.
    async fn complete_stream(&self, request: CompletionRequest) -> Result<FragmentStream>;
}
