use crate::clients::completion::{CompletionClient, CompletionRequest, FragmentStream};
use crate::error::{ErrorBackend, Result};
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream;
use std::sync::Mutex;

/// What the fake upstream answers with.
#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    Fragments(Vec<String>),
    FailAfter(Vec<String>, String),
    Unauthorized,
    RateLimited,
    Fail(String),
}

/// In-process stand-in for the completion service that records requests.
#[derive(Debug)]
pub struct ScriptedClient {
    script: Script,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub fn new(script: Script) -> Self {
        ScriptedClient {
            script,
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: CompletionRequest) {
        self.requests.lock().unwrap().push(request);
    }

    fn failure(&self) -> Option<ErrorBackend> {
        match &self.script {
            Script::Unauthorized => Some(ErrorBackend::Unauthorized),
            Script::RateLimited => Some(ErrorBackend::RateLimited),
            Script::Fail(message) => Some(ErrorBackend::UpstreamError(message.clone())),
            _ => None,
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.record(request);
        if let Some(err) = self.failure() {
            return Err(err);
        }
        match &self.script {
            Script::Reply(text) => Ok(text.trim().to_string()),
            Script::Fragments(parts) => Ok(parts.concat().trim().to_string()),
            other => Err(ErrorBackend::UpstreamError(format!("unscripted: {:?}", other))),
        }
    }

    async fn complete_stream(&self, request: CompletionRequest) -> Result<FragmentStream> {
        self.record(request);
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let items: Vec<Result<String>> = match &self.script {
            Script::Reply(text) => vec![Ok(text.clone())],
            Script::Fragments(parts) => parts.iter().cloned().map(Ok).collect(),
            Script::FailAfter(parts, message) => parts
                .iter()
                .cloned()
                .map(Ok)
                .chain(std::iter::once(Err(ErrorBackend::UpstreamError(
                    message.clone(),
                ))))
                .collect(),
            _ => vec![],
        };
        Ok(stream::iter(items).boxed())
    }
}
