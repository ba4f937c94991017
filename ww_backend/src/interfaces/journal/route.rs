use crate::interfaces::journal::controller::{
    create_chapter_handler, list_chapters_handler, prompt_journal_handler,
};
use crate::server::app_state::AppState;
use axum::routing::get;
use std::sync::Arc;
use ww_core::server::routes::{BackendApiChapter, BackendApiNovel};

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiNovel::PromptJournal.path(None).as_str(),
            get(prompt_journal_handler),
        )
        .route(
            BackendApiChapter::ByNovel.path(None).as_str(),
            get(list_chapters_handler).post(create_chapter_handler),
        )
}
