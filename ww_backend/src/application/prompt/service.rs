use crate::{
    clients::completion::CompletionClient,
    config::GeneratorConfig,
    domain::prompt::{
        entity::{IntoPrompt, IntoPrompts},
        repository::PromptRepository,
        value_object::{FallbackReason, GeneratePromptOutput},
    },
    error::{ErrorBackend, Result},
    use_cases::prompt::generate_prompt_use_case::GeneratePromptUseCase,
    utils::{prompt_text::clean_prompt_text, stream_channel::StreamChannel},
};
use chrono::Utc;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use ww_core::{
    server::{
        default_config::MAX_BATCH_COUNT,
        payload::backend::{
            generate_batch_request::GenerateBatchRequest,
            generate_batch_response::GenerateBatchResponse,
        },
    },
    types::{prompt::Prompt, stream_data::StreamData},
};

/// Trims the genre and rejects blank ones.
fn require_genre(genre: Option<&str>) -> Result<String> {
    match genre.map(str::trim) {
        Some(genre) if !genre.is_empty() => Ok(genre.to_string()),
        _ => Err(ErrorBackend::MissingGenre),
    }
}

#[derive(Clone, Debug)]
pub struct PromptService {
    repo_prompt: Arc<PromptRepository>,
    service_background: Arc<PromptBackgroundService>,
    client: Arc<dyn CompletionClient>,
    config: Arc<GeneratorConfig>,
}

impl PromptService {
    pub fn new(
        repo_prompt: Arc<PromptRepository>,
        client: Arc<dyn CompletionClient>,
        config: Arc<GeneratorConfig>,
    ) -> PromptService {
        let service_background = Arc::new(PromptBackgroundService::new(repo_prompt.clone()));
        PromptService {
            repo_prompt,
            service_background,
            client,
            config,
        }
    }

    fn use_case(&self) -> Result<GeneratePromptUseCase> {
        if !self.config.is_configured() {
            return Err(ErrorBackend::ServiceNotConfigured);
        }
        Ok(GeneratePromptUseCase::new(
            self.client.clone(),
            self.config.clone(),
        ))
    }

    /// Generates one prompt. A successful result is stored in the background
    /// unless an identical one exists; any upstream failure falls back to a
    /// stored prompt of the same genre.
    pub async fn generate_one(&self, genre: &str) -> Result<GeneratePromptOutput> {
        let genre = require_genre(Some(genre))?;
        let use_case = self.use_case()?;

        match use_case.generate_one(&genre).await {
            Ok(prompt) => {
                self.service_background
                    .clone()
                    .store_if_absent(genre.clone(), prompt.clone());
                Ok(GeneratePromptOutput::Generated {
                    genre,
                    prompt,
                    model: self.config.model.clone(),
                })
            }
            Err(err) => self.fallback(genre, err).await,
        }
    }

    async fn fallback(&self, genre: String, err: ErrorBackend) -> Result<GeneratePromptOutput> {
        warn!("Failed to generate prompt for {}: {}", genre, err);
        let reason = FallbackReason::from(&err);

        match self.repo_prompt.sample_random(&genre).await {
            Ok(Some(stored)) => {
                info!(%genre, reason = reason.as_str(), "serving stored prompt");
                Ok(GeneratePromptOutput::Fallback {
                    genre,
                    prompt: stored.text,
                    reason,
                })
            }
            Ok(None) => Err(Self::exhausted(err)),
            Err(lookup) => {
                error!("Fallback lookup failed for {}: {}", genre, lookup);
                Err(Self::exhausted(err))
            }
        }
    }

    /// Credential and throttling failures keep their own status once the
    /// fallback is out of options.
    fn exhausted(err: ErrorBackend) -> ErrorBackend {
        match err {
            ErrorBackend::Unauthorized => ErrorBackend::Unauthorized,
            ErrorBackend::RateLimited => ErrorBackend::RateLimited,
            other => ErrorBackend::FallbackExhausted(other.to_string()),
        }
    }

    /// Starts a streamed generation and returns the event receiver. The
    /// concatenated text is stored once the upstream stream ends cleanly.
    /// Errors never fall back to stored prompts.
    pub async fn generate_stream(&self, genre: &str) -> Result<Receiver<StreamData>> {
        let genre = require_genre(Some(genre))?;
        let use_case = self.use_case()?;
        let StreamChannel { tx, rx } = StreamChannel::new();
        let service_background = self.service_background.clone();

        tokio::spawn(async move {
            let mut fragments = match use_case.open_stream(&genre).await {
                Ok(fragments) => fragments,
                Err(e) => {
                    error!("Failed to open prompt stream for {}: {}", genre, e);
                    let _ = tx.send(StreamData::for_stream_error(e.to_string())).await;
                    return;
                }
            };

            let mut full_prompt = String::new();
            while let Some(fragment) = fragments.next().await {
                match fragment {
                    Ok(content) if content.is_empty() => continue,
                    Ok(content) => {
                        full_prompt.push_str(&content);
                        if tx.send(StreamData::for_string(content)).await.is_err() {
                            debug!(%genre, "stream receiver dropped, prompt not stored");
                            return;
                        }
                    }
                    Err(e) => {
                        error!("Prompt stream for {} failed: {}", genre, e);
                        let _ = tx.send(StreamData::for_stream_error(e.to_string())).await;
                        return;
                    }
                }
            }

            let _ = tx.send(StreamData::for_done()).await;
            drop(tx);
            service_background.store(genre, clean_prompt_text(&full_prompt));
        });

        Ok(rx)
    }

    /// One upstream call for the whole batch; every item is stored without
    /// a duplicate check.
    pub async fn generate_batch(&self, req: GenerateBatchRequest) -> Result<GenerateBatchResponse> {
        let genre = require_genre(req.genre.as_deref())?;
        if req.count == 0 || req.count > MAX_BATCH_COUNT {
            return Err(ErrorBackend::InvalidBatchCount {
                count: req.count,
                max: MAX_BATCH_COUNT,
            });
        }
        let use_case = self.use_case()?;

        let prompts = use_case.generate_batch(&genre, req.count).await.map_err(|e| {
            error!("Failed to generate prompt batch for {}: {}", genre, e);
            e
        })?;

        self.service_background
            .clone()
            .store_all(genre.clone(), prompts.clone());

        Ok(GenerateBatchResponse::new(
            genre,
            prompts,
            self.config.model.clone(),
        ))
    }

    pub async fn get_random(&self, genre: &str) -> Result<Prompt> {
        let genre = require_genre(Some(genre))?;
        let prompt = self
            .repo_prompt
            .sample_random(&genre)
            .await?
            .ok_or_else(|| ErrorBackend::PromptNotFound(genre))?;
        Ok(prompt.into_prompt())
    }

    /// Newest first. A blank filter lists every genre.
    pub async fn list_all(&self, genre: Option<&str>) -> Result<Vec<Prompt>> {
        let genre = genre.map(str::trim).filter(|g| !g.is_empty());
        let prompts = self.repo_prompt.find_all(genre).await?;
        Ok(prompts.into_prompts())
    }
}

/// Writes generated prompts after the caller already has its answer.
/// Failures are logged and never reach the caller.
#[derive(Debug)]
pub struct PromptBackgroundService {
    repo_prompt: Arc<PromptRepository>,
}

impl PromptBackgroundService {
    pub fn new(repo_prompt: Arc<PromptRepository>) -> PromptBackgroundService {
        PromptBackgroundService { repo_prompt }
    }

    pub fn store_if_absent(self: Arc<Self>, genre: String, text: String) -> JoinHandle<()> {
        tokio::spawn(async move {
            match self
                .repo_prompt
                .insert_if_absent(&genre, &text, Utc::now())
                .await
            {
                Ok(true) => debug!(%genre, "prompt stored"),
                Ok(false) => info!("Duplicate prompt detected for genre {}, not saved.", genre),
                Err(e) => error!("Error saving prompt: {}", e),
            }
        })
    }

    pub fn store(self: Arc<Self>, genre: String, text: String) -> JoinHandle<()> {
        tokio::spawn(async move {
            if text.is_empty() {
                warn!(%genre, "empty prompt, not saved");
                return;
            }
            if let Err(e) = self.repo_prompt.insert(&genre, &text, Utc::now()).await {
                error!("Error saving prompt: {}", e);
            }
        })
    }

    pub fn store_all(self: Arc<Self>, genre: String, texts: Vec<String>) -> JoinHandle<()> {
        tokio::spawn(async move {
            for text in texts {
                if let Err(e) = self.repo_prompt.insert(&genre, &text, Utc::now()).await {
                    error!("Error saving prompt: {}", e);
                }
            }
        })
    }
}
