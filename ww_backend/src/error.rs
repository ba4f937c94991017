use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, warn};

pub type ResultAPIStream = std::result::Result<Response, crate::error::ErrorBackend>;
pub type ResultAPI = std::result::Result<Json<Value>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] ww_core::error::ErrorCore),

    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("body rejected with: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("query rejected with: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("path rejected with: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Genre is required")]
    MissingGenre,

    #[error("count must be between 1 and {max}, got {count}")]
    InvalidBatchCount { count: usize, max: usize },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Completion API key not configured")]
    ServiceNotConfigured,

    #[error("Completion service rejected the API key")]
    Unauthorized,

    #[error("Completion service rate limit exceeded")]
    RateLimited,

    #[error("Completion service error: {0}")]
    UpstreamError(String),

    #[error("Failed to generate prompt and no stored prompt is available: {0}")]
    FallbackExhausted(String),

    #[error("No prompts found for genre {0}")]
    PromptNotFound(String),

    #[error("Novel {0} not found")]
    NovelNotFound(i32),

    #[error("Missing bearer token")]
    Unauthenticated,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Access to this resource is forbidden")]
    Forbidden,

    #[error("Failed to persist: {0}")]
    FailedToPersist(String),

    #[error("Failed to build SSE response: {0}")]
    FailedBuildSSEResponse(String),
}

impl ErrorBackend {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::MissingGenre
            | ErrorBackend::InvalidBatchCount { .. }
            | ErrorBackend::InvalidRequest(_)
            | ErrorBackend::JsonRejection(_)
            | ErrorBackend::QueryRejection(_)
            | ErrorBackend::PathRejection(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::Unauthenticated | ErrorBackend::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorBackend::InvalidToken(_) | ErrorBackend::Forbidden => StatusCode::FORBIDDEN,
            ErrorBackend::PromptNotFound(_) | ErrorBackend::NovelNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ErrorBackend::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorBackend::Core(_)
            | ErrorBackend::Db(_)
            | ErrorBackend::IO(_)
            | ErrorBackend::MissingConfig(_)
            | ErrorBackend::ServiceNotConfigured
            | ErrorBackend::UpstreamError(_)
            | ErrorBackend::FallbackExhausted(_)
            | ErrorBackend::FailedToPersist(_)
            | ErrorBackend::FailedBuildSSEResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ErrorBackend::MissingGenre => "Genre is required",
            ErrorBackend::InvalidBatchCount { .. }
            | ErrorBackend::InvalidRequest(_)
            | ErrorBackend::JsonRejection(_)
            | ErrorBackend::QueryRejection(_)
            | ErrorBackend::PathRejection(_) => "Invalid request",
            ErrorBackend::ServiceNotConfigured => "Completion API key not configured",
            ErrorBackend::Unauthorized => "Invalid API key",
            ErrorBackend::RateLimited => "Rate limit exceeded",
            ErrorBackend::UpstreamError(_) => "Failed to generate prompts",
            ErrorBackend::FallbackExhausted(_) => "Failed to generate prompt",
            ErrorBackend::PromptNotFound(_) => "No prompts found for this genre",
            ErrorBackend::NovelNotFound(_) => "Novel not found",
            ErrorBackend::Unauthenticated => "Access token required",
            ErrorBackend::InvalidToken(_) => "Invalid or expired token",
            ErrorBackend::Forbidden => "Forbidden",
            ErrorBackend::Core(_)
            | ErrorBackend::Db(_)
            | ErrorBackend::IO(_)
            | ErrorBackend::MissingConfig(_)
            | ErrorBackend::FailedToPersist(_)
            | ErrorBackend::FailedBuildSSEResponse(_) => "Internal Server Error",
        }
    }

    fn message(&self) -> String {
        match self {
            ErrorBackend::ServiceNotConfigured => {
                "Add COMPLETION_API_KEY to your .env file".to_string()
            }
            ErrorBackend::Unauthorized => "Please check your completion API key".to_string(),
            ErrorBackend::RateLimited => "Please try again later".to_string(),
            ErrorBackend::PromptNotFound(_) => "Try generating a new prompt first".to_string(),
            ErrorBackend::Core(_)
            | ErrorBackend::Db(_)
            | ErrorBackend::IO(_)
            | ErrorBackend::MissingConfig(_)
            | ErrorBackend::FailedToPersist(_)
            | ErrorBackend::FailedBuildSSEResponse(_) => {
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("ErrorBackend occurred: {}", self);
        } else {
            warn!("Request rejected ({}): {}", status, self);
        }

        let mut body = json!({
            "error": self.label(),
            "message": self.message(),
        });
        if let ErrorBackend::FallbackExhausted(_) = self {
            body["fallback_failed"] = Value::Bool(true);
        }

        (status, Json(body)).into_response()
    }
}
