use crate::error::{ResultAPI, ResultAPIStream};
use crate::server::app_state::AppState;
use crate::server::middleware::auth::Claims;
use crate::utils::sse_response_builder::SseResponseBuilder;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;
use ww_core::server::payload::backend::{
    accept_prompt_request::AcceptPromptRequest, generate_batch_request::GenerateBatchRequest,
    generate_prompt_response::GeneratePromptResponse, list_prompts_request::ListPromptsRequest,
    list_prompts_response::ListPromptsResponse,
};

async fn generate(state: &AppState, genre: &str) -> ResultAPI {
    let output = state.service_prompt.generate_one(genre).await?;
    Ok(Json(json!(GeneratePromptResponse::from(output))))
}

pub async fn public_generate_prompt_handler(
    State(state): State<Arc<AppState>>,
    genre: std::result::Result<Path<String>, PathRejection>,
) -> ResultAPI {
    generate(&state, &genre?.0).await
}

pub async fn generate_prompt_handler(
    State(state): State<Arc<AppState>>,
    genre: std::result::Result<Path<String>, PathRejection>,
) -> ResultAPI {
    generate(&state, &genre?.0).await
}

pub async fn generate_prompt_stream_handler(
    State(state): State<Arc<AppState>>,
    genre: std::result::Result<Path<String>, PathRejection>,
) -> ResultAPIStream {
    let receiver = state.service_prompt.generate_stream(&genre?.0).await?;
    SseResponseBuilder::new(receiver).build()
}

pub async fn generate_prompt_batch_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<GenerateBatchRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    let response = state.service_prompt.generate_batch(req).await?;
    Ok(Json(json!(response)))
}

pub async fn random_prompt_handler(
    State(state): State<Arc<AppState>>,
    genre: std::result::Result<Path<String>, PathRejection>,
) -> ResultAPI {
    let prompt = state.service_prompt.get_random(&genre?.0).await?;
    Ok(Json(json!(prompt)))
}

pub async fn list_prompts_handler(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<ListPromptsRequest>, QueryRejection>,
) -> ResultAPI {
    let query = query?.0;
    let prompts = state
        .service_prompt
        .list_all(query.genre.as_deref())
        .await?;
    Ok(Json(json!(ListPromptsResponse::from(prompts))))
}

pub async fn accept_prompt_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    req: std::result::Result<Json<AcceptPromptRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    let accepted = state
        .service_journal
        .accept_prompt(&claims.id, claims.username.as_deref(), req)
        .await?;
    Ok(Json(json!(accepted)))
}
