use crate::interfaces::prompt::controller::{
    accept_prompt_handler, generate_prompt_batch_handler, generate_prompt_handler,
    generate_prompt_stream_handler, list_prompts_handler, public_generate_prompt_handler,
    random_prompt_handler,
};
use crate::server::app_state::AppState;
use axum::routing::{get, post};
use std::sync::Arc;
use ww_core::server::routes::BackendApiPrompt;

/// Routes reachable without a token.
pub fn public_routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiPrompt::PublicGenerate.path(None).as_str(),
        post(public_generate_prompt_handler),
    )
}

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiPrompt::Generate.path(None).as_str(),
            post(generate_prompt_handler),
        )
        .route(
            BackendApiPrompt::GenerateStream.path(None).as_str(),
            get(generate_prompt_stream_handler),
        )
        .route(
            BackendApiPrompt::GenerateBatch.path(None).as_str(),
            post(generate_prompt_batch_handler),
        )
        .route(
            BackendApiPrompt::Random.path(None).as_str(),
            get(random_prompt_handler),
        )
        .route(
            BackendApiPrompt::List.path(None).as_str(),
            get(list_prompts_handler),
        )
        .route(
            BackendApiPrompt::Accept.path(None).as_str(),
            post(accept_prompt_handler),
        )
}
