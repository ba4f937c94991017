use crate::clients::completion::{CompletionClient, CompletionRequest, FragmentStream};
use crate::config::GeneratorConfig;
use crate::error::{ErrorBackend, Result};
use crate::utils::sse_lines::stream_response_lines;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// One `data:` event of a streamed completion.
#[derive(Debug, Deserialize)]
struct ChatCompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: Option<Delta>,
}

#[derive(Debug, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible `chat/completions` endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &GeneratorConfig) -> Self {
        OpenAiClient {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn send(&self, request: &CompletionRequest) -> Result<Response> {
        let mut builder = self.client.post(self.endpoint()).json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }
        let res = builder.send().await.map_err(|e| {
            if e.is_connect() {
                ErrorBackend::UpstreamError(format!("connection refused: {}", self.base_url))
            } else {
                ErrorBackend::UpstreamError(e.to_string())
            }
        })?;
        handle_status(res).await
    }
}

async fn handle_status(res: Response) -> Result<Response> {
    match res.status() {
        StatusCode::UNAUTHORIZED => Err(ErrorBackend::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => Err(ErrorBackend::RateLimited),
        status if status.is_success() => Ok(res),
        status => {
            let body = res.text().await.unwrap_or_default();
            Err(ErrorBackend::UpstreamError(format!("{}: {}", status, body)))
        }
    }
}

/// Extracts the content delta from one SSE line. `Ok(None)` for keep-alive
/// comments, non-data fields, empty deltas and the `[DONE]` sentinel.
fn parse_chunk_line(line: &str) -> Result<Option<String>> {
    let Some(payload) = line.trim().strip_prefix("data:") else {
        return Ok(None);
    };
    let payload = payload.trim();
    if payload.is_empty() || payload == "[DONE]" {
        return Ok(None);
    }
    let chunk: ChatCompletionChunk = serde_json::from_str(payload)
        .map_err(|e| ErrorBackend::UpstreamError(format!("malformed stream chunk: {}", e)))?;
    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta)
        .and_then(|delta| delta.content)
        .filter(|content| !content.is_empty()))
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        debug!(model = %request.model, "requesting completion");
        let res = self.send(&request).await?;
        let completion: ChatCompletion = res
            .json()
            .await
            .map_err(|e| ErrorBackend::UpstreamError(format!("malformed completion: {}", e)))?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| ErrorBackend::UpstreamError("completion had no content".to_string()))
    }

    async fn complete_stream(&self, request: CompletionRequest) -> Result<FragmentStream> {
        debug!(model = %request.model, "opening completion stream");
        let res = self.send(&request).await?;
        let lines = stream_response_lines(res.bytes_stream());
        let fragments = ReceiverStream::new(lines).filter_map(|line| async move {
            match line {
                Ok(line) => parse_chunk_line(&line).transpose(),
                Err(e) => Some(Err(e)),
            }
        });
        Ok(fragments.boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_deltas_are_extracted() {
        let line = r#"data: {"id":"x","choices":[{"index":0,"delta":{"content":"Once "}}]}"#;
        assert_eq!(parse_chunk_line(line).unwrap(), Some("Once ".to_string()));
    }

    #[test]
    fn control_lines_carry_no_fragment() {
        for line in [
            "data: [DONE]",
            ": keep-alive",
            "event: message",
            r#"data: {"choices":[{"delta":{"role":"assistant"}}]}"#,
            r#"data: {"choices":[{"delta":{"content":""}}]}"#,
            r#"data: {"choices":[]}"#,
        ] {
            assert_eq!(parse_chunk_line(line).unwrap(), None, "{line}");
        }
    }

    #[test]
    fn malformed_chunks_are_upstream_errors() {
        let err = parse_chunk_line("data: {not json").unwrap_err();
        assert!(matches!(err, ErrorBackend::UpstreamError(_)));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = OpenAiClient::new(&GeneratorConfig {
            api_key: None,
            base_url: "http://localhost:8000/v1/".into(),
            model: "m".into(),
        });
        assert_eq!(client.endpoint(), "http://localhost:8000/v1/chat/completions");
    }
}
