use crate::application::{journal::service::JournalService, prompt::service::PromptService};
use crate::clients::completion::CompletionClient;
use crate::config::{AuthConfig, GeneratorConfig};
use crate::domain::{
    chapter::repository::ChapterRepository, novel::repository::NovelRepository,
    prompt::repository::PromptRepository,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub service_prompt: Arc<PromptService>,
    pub service_journal: Arc<JournalService>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(
        db: Arc<DatabaseConnection>,
        client: Arc<dyn CompletionClient>,
        generator: GeneratorConfig,
        auth: AuthConfig,
    ) -> Self {
        let repo_prompt = Arc::new(PromptRepository::new(db.clone()));
        let repo_novel = Arc::new(NovelRepository::new(db.clone()));
        let repo_chapter = Arc::new(ChapterRepository::new(db));
        AppState {
            service_prompt: Arc::new(PromptService::new(
                repo_prompt,
                client,
                Arc::new(generator),
            )),
            service_journal: Arc::new(JournalService::new(repo_novel, repo_chapter)),
            auth,
        }
    }
}
