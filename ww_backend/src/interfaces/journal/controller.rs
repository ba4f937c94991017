use crate::error::{ErrorBackend, ResultAPI};
use crate::server::app_state::AppState;
use crate::server::middleware::auth::Claims;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;
use ww_core::server::payload::backend::{
    create_chapter_request::CreateChapterRequest, prompt_journal_request::PromptJournalRequest,
};

pub async fn prompt_journal_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    user_id: std::result::Result<Path<i32>, PathRejection>,
    query: std::result::Result<Query<PromptJournalRequest>, QueryRejection>,
) -> ResultAPI {
    let user_id = user_id?.0;
    let query = query?.0;
    if user_id != claims.id {
        return Err(ErrorBackend::Forbidden);
    }
    let username = query.username.as_deref().or(claims.username.as_deref());
    let journal = state
        .service_journal
        .get_or_create_journal(&user_id, username)
        .await?;
    Ok(Json(json!(journal)))
}

pub async fn create_chapter_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    novel_id: std::result::Result<Path<i32>, PathRejection>,
    req: std::result::Result<Json<CreateChapterRequest>, JsonRejection>,
) -> ResultAPI {
    let novel_id = novel_id?.0;
    let req = req?.0;
    let chapter = state
        .service_journal
        .create_chapter(&claims.id, &novel_id, req)
        .await?;
    Ok(Json(json!(chapter)))
}

pub async fn list_chapters_handler(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    novel_id: std::result::Result<Path<i32>, PathRejection>,
) -> ResultAPI {
    let chapters = state
        .service_journal
        .list_chapters(&claims.id, &novel_id?.0)
        .await?;
    Ok(Json(json!(chapters)))
}
