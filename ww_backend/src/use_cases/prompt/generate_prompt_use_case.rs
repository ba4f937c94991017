use crate::clients::completion::{ChatMessage, CompletionClient, CompletionRequest, FragmentStream};
use crate::config::GeneratorConfig;
use crate::domain::prompt::value_object::{GenerationMode, GenerationRequest};
use crate::error::{ErrorBackend, Result};
use crate::utils::prompt_text::{clean_prompt_text, split_numbered};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;
use ww_core::types::genre::instruction_for;

const TOP_P: f32 = 0.95;
const SINGLE_TEMPERATURE_MIN: f32 = 0.8;
const SINGLE_TEMPERATURE_MAX: f32 = 1.0;
const STREAM_TEMPERATURE: f32 = 0.98;
const BATCH_TEMPERATURE: f32 = 0.9;
const PROMPT_MAX_TOKENS: u32 = 200;
const BATCH_MIN_MAX_TOKENS: u32 = 500;
const BATCH_TOKENS_PER_ITEM: u32 = 160;
const RANDOM_TAG_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short random marker appended to the user instruction so identical
/// requests do not come back as verbatim repeats.
pub fn random_tag() -> String {
    let mut rng = rand::rng();
    (0..RANDOM_TAG_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Builds completion requests for a genre and runs them against the
/// completion service. Output is cleaned here but not persisted.
pub struct GeneratePromptUseCase {
    client: Arc<dyn CompletionClient>,
    config: Arc<GeneratorConfig>,
}

impl GeneratePromptUseCase {
    pub fn new(client: Arc<dyn CompletionClient>, config: Arc<GeneratorConfig>) -> Self {
        GeneratePromptUseCase { client, config }
    }

    pub fn build_request(&self, req: &GenerationRequest, tag: &str) -> CompletionRequest {
        let genre = req.genre.as_str();
        let (instruction, temperature, max_tokens) = match req.mode {
            GenerationMode::Single => (
                format!(
                    "Generate a unique and imaginative creative writing prompt for a {genre} story. \
                     Avoid reusing earlier ideas or generic setups. \
                     The prompt should be 2-3 sentences, intriguing, and provide a clear starting point for a story. \
                     [{tag}]"
                ),
                rand::rng().random_range(SINGLE_TEMPERATURE_MIN..SINGLE_TEMPERATURE_MAX),
                PROMPT_MAX_TOKENS,
            ),
            GenerationMode::Streaming => (
                format!(
                    "Generate a unique, creative writing prompt for a {genre} story. \
                     Make sure it's distinct from earlier ideas. \
                     The prompt should be 2-3 sentences, intriguing, and clear. \
                     [{tag}]"
                ),
                STREAM_TEMPERATURE,
                PROMPT_MAX_TOKENS,
            ),
            GenerationMode::Batch(count) => (
                format!(
                    "Generate {count} unique creative writing prompts for {genre} stories. \
                     Each prompt should be 2-3 sentences, distinct, and intriguing. \
                     Number them 1, 2, 3, etc. [{tag}]"
                ),
                BATCH_TEMPERATURE,
                BATCH_MIN_MAX_TOKENS.max(count as u32 * BATCH_TOKENS_PER_ITEM),
            ),
        };

        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(instruction_for(genre)),
                ChatMessage::user(instruction),
            ],
            temperature,
            top_p: TOP_P,
            max_tokens,
            stream: matches!(req.mode, GenerationMode::Streaming),
        }
    }

    /// One buffered call, returning the cleaned prompt text.
    pub async fn generate_one(&self, genre: &str) -> Result<String> {
        let req = GenerationRequest::new(genre, GenerationMode::Single);
        let request = self.build_request(&req, &random_tag());
        debug!(genre, temperature = request.temperature, "requesting single prompt");
        let raw = self.client.complete(request).await?;
        let prompt = clean_prompt_text(&raw);
        if prompt.is_empty() {
            return Err(ErrorBackend::UpstreamError(String::from(
                "completion returned an empty prompt",
            )));
        }
        Ok(prompt)
    }

    /// Opens a streamed call. Fragments are passed through untouched.
    pub async fn open_stream(&self, genre: &str) -> Result<FragmentStream> {
        let req = GenerationRequest::new(genre, GenerationMode::Streaming);
        let request = self.build_request(&req, &random_tag());
        debug!(genre, "opening prompt stream");
        self.client.complete_stream(request).await
    }

    /// One buffered call asking for `count` numbered prompts, split in
    /// generation order.
    pub async fn generate_batch(&self, genre: &str, count: usize) -> Result<Vec<String>> {
        let req = GenerationRequest::new(genre, GenerationMode::Batch(count));
        let request = self.build_request(&req, &random_tag());
        debug!(genre, count, "requesting prompt batch");
        let raw = self.client.complete(request).await?;
        Ok(split_numbered(&raw))
    }
}
