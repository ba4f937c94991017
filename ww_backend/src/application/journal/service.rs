use crate::{
    domain::{
        chapter::{
            entity::{IntoChapter, IntoChapters},
            repository::{ChapterRepository, NewChapter},
        },
        novel::{
            entity::IntoNovel,
            repository::{NewPromptJournal, NovelRepository},
        },
    },
    error::{ErrorBackend, Result},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use ww_core::{
    server::{
        default_config::DEFAULT_JOURNAL_USERNAME,
        payload::backend::{
            accept_prompt_request::AcceptPromptRequest,
            accept_prompt_response::AcceptPromptResponse,
            create_chapter_request::CreateChapterRequest,
        },
    },
    types::{chapter::Chapter, novel::Novel},
};

const JOURNAL_GENRE: &str = "Mixed";
const JOURNAL_SUMMARY: &str = "A collection of daily writing prompts and responses";

pub fn journal_title(username: &str) -> String {
    format!("{username}'s Writing Prompts")
}

/// e.g. `Fantasy - Mar 7, 2025`
pub fn prompt_chapter_title(genre: &str, date: DateTime<Utc>) -> String {
    format!("{} - {}", genre, date.format("%b %-d, %Y"))
}

pub fn prompt_chapter_content(prompt: &str) -> String {
    format!("Prompt: {prompt}\n\n---\n\nYour response:\n\n")
}

/// Per-user prompt journal and the chapters seeded from accepted prompts.
#[derive(Clone, Debug)]
pub struct JournalService {
    repo_novel: Arc<NovelRepository>,
    repo_chapter: Arc<ChapterRepository>,
}

impl JournalService {
    pub fn new(repo_novel: Arc<NovelRepository>, repo_chapter: Arc<ChapterRepository>) -> Self {
        Self {
            repo_novel,
            repo_chapter,
        }
    }

    /// Two concurrent first calls for the same user may both create a
    /// journal; lookups always return the oldest one.
    pub async fn get_or_create_journal(
        &self,
        user_id: &i32,
        username: Option<&str>,
    ) -> Result<Novel> {
        if let Some(journal) = self.repo_novel.find_prompt_journal(user_id).await? {
            return Ok(journal.into_novel());
        }
        let username = username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_JOURNAL_USERNAME);
        info!("Creating prompt journal for user {}", user_id);
        let journal = self
            .repo_novel
            .create_prompt_journal(NewPromptJournal {
                user_id: *user_id,
                title: journal_title(username),
                genre: JOURNAL_GENRE.to_string(),
                summary: JOURNAL_SUMMARY.to_string(),
                created_at: Utc::now(),
            })
            .await?;
        Ok(journal.into_novel())
    }

    pub async fn accept_prompt(
        &self,
        user_id: &i32,
        username: Option<&str>,
        req: AcceptPromptRequest,
    ) -> Result<AcceptPromptResponse> {
        let genre = req.genre.trim();
        if genre.is_empty() {
            return Err(ErrorBackend::MissingGenre);
        }
        let prompt = req.prompt.trim();
        if prompt.is_empty() {
            return Err(ErrorBackend::InvalidRequest(String::from(
                "Prompt is required",
            )));
        }

        let journal = self.get_or_create_journal(user_id, username).await?;
        let now = Utc::now();
        let chapter = self
            .repo_chapter
            .create(NewChapter {
                novel_id: journal.id,
                title: prompt_chapter_title(genre, now),
                content: prompt_chapter_content(prompt),
                prompt_text: Some(prompt.to_string()),
                prompt_genre: Some(genre.to_string()),
                created_at: now,
            })
            .await?;

        Ok(AcceptPromptResponse {
            journal,
            chapter: chapter.into_chapter(),
        })
    }

    pub async fn create_chapter(
        &self,
        user_id: &i32,
        novel_id: &i32,
        req: CreateChapterRequest,
    ) -> Result<Chapter> {
        let title = req
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .ok_or_else(|| ErrorBackend::InvalidRequest(String::from("Title is required")))?
            .to_string();
        self.owned_novel(user_id, novel_id).await?;

        let chapter = self
            .repo_chapter
            .create(NewChapter {
                novel_id: *novel_id,
                title,
                content: req.content.unwrap_or_default(),
                prompt_text: req.prompt_text,
                prompt_genre: req.prompt_genre,
                created_at: Utc::now(),
            })
            .await?;
        Ok(chapter.into_chapter())
    }

    /// Oldest first.
    pub async fn list_chapters(&self, user_id: &i32, novel_id: &i32) -> Result<Vec<Chapter>> {
        self.owned_novel(user_id, novel_id).await?;
        let chapters = self.repo_chapter.find_all_by_novel_id(novel_id).await?;
        Ok(chapters.into_chapters())
    }

    async fn owned_novel(&self, user_id: &i32, novel_id: &i32) -> Result<Novel> {
        let novel = self
            .repo_novel
            .find_by_id(novel_id)
            .await?
            .ok_or(ErrorBackend::NovelNotFound(*novel_id))?;
        if novel.user_id != *user_id {
            return Err(ErrorBackend::Forbidden);
        }
        Ok(novel.into_novel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_db;
    use chrono::TimeZone;

    async fn service() -> JournalService {
        let db = memory_db().await;
        JournalService::new(
            Arc::new(NovelRepository::new(db.clone())),
            Arc::new(ChapterRepository::new(db)),
        )
    }

    #[test]
    fn chapter_title_and_content_format() {
        let date = Utc.with_ymd_and_hms(2025, 3, 7, 18, 30, 0).unwrap();
        assert_eq!(prompt_chapter_title("Fantasy", date), "Fantasy - Mar 7, 2025");
        assert_eq!(
            prompt_chapter_content("A door appears."),
            "Prompt: A door appears.\n\n---\n\nYour response:\n\n"
        );
    }

    #[tokio::test]
    async fn journal_is_created_once_per_user() {
        let journals = service().await;

        let first = journals.get_or_create_journal(&7, Some("Ada")).await.unwrap();
        let again = journals.get_or_create_journal(&7, Some("Other")).await.unwrap();
        let default = journals.get_or_create_journal(&8, None).await.unwrap();

        assert_eq!(first.id, again.id);
        assert_eq!(first.title, "Ada's Writing Prompts");
        assert_eq!(first.genre.as_deref(), Some("Mixed"));
        assert_eq!(
            first.summary.as_deref(),
            Some("A collection of daily writing prompts and responses")
        );
        assert!(first.is_prompt_journal);
        assert_eq!(default.title, "Writer's Writing Prompts");
        assert_ne!(default.id, first.id);
    }

    #[tokio::test]
    async fn accept_prompt_appends_seeded_chapter() {
        let journals = service().await;

        let accepted = journals
            .accept_prompt(
                &3,
                Some("Sam"),
                AcceptPromptRequest {
                    genre: String::from("mystery"),
                    prompt: String::from("The key fits every lock but one."),
                },
            )
            .await
            .unwrap();

        assert_eq!(accepted.journal.user_id, 3);
        assert_eq!(accepted.chapter.novel_id, accepted.journal.id);
        assert!(accepted.chapter.title.starts_with("mystery - "));
        assert_eq!(
            accepted.chapter.content,
            "Prompt: The key fits every lock but one.\n\n---\n\nYour response:\n\n"
        );
        assert_eq!(
            accepted.chapter.prompt_text.as_deref(),
            Some("The key fits every lock but one.")
        );
        assert_eq!(accepted.chapter.prompt_genre.as_deref(), Some("mystery"));

        let chapters = journals.list_chapters(&3, &accepted.journal.id).await.unwrap();
        assert_eq!(chapters.len(), 1);
    }

    #[tokio::test]
    async fn accept_prompt_requires_genre_and_prompt() {
        let journals = service().await;
        assert!(matches!(
            journals
                .accept_prompt(
                    &1,
                    None,
                    AcceptPromptRequest {
                        genre: String::from(" "),
                        prompt: String::from("x"),
                    },
                )
                .await,
            Err(ErrorBackend::MissingGenre)
        ));
        assert!(matches!(
            journals
                .accept_prompt(
                    &1,
                    None,
                    AcceptPromptRequest {
                        genre: String::from("drama"),
                        prompt: String::new(),
                    },
                )
                .await,
            Err(ErrorBackend::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn chapters_are_listed_oldest_first_and_guarded() {
        let journals = service().await;
        let journal = journals.get_or_create_journal(&5, None).await.unwrap();

        for title in ["One", "Two"] {
            journals
                .create_chapter(
                    &5,
                    &journal.id,
                    CreateChapterRequest {
                        title: Some(title.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        let titles: Vec<String> = journals
            .list_chapters(&5, &journal.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["One", "Two"]);

        assert!(matches!(
            journals.list_chapters(&6, &journal.id).await,
            Err(ErrorBackend::Forbidden)
        ));
        assert!(matches!(
            journals
                .create_chapter(&5, &999, CreateChapterRequest {
                    title: Some(String::from("Lost")),
                    ..Default::default()
                })
                .await,
            Err(ErrorBackend::NovelNotFound(999))
        ));
        assert!(matches!(
            journals
                .create_chapter(&5, &journal.id, CreateChapterRequest::default())
                .await,
            Err(ErrorBackend::InvalidRequest(_))
        ));
    }
}
