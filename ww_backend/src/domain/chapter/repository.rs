use std::sync::Arc;

use crate::domain;
use crate::error::Result;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Debug, Clone)]
pub struct NewChapter {
    pub novel_id: i32,
    pub title: String,
    pub content: String,
    pub prompt_text: Option<String>,
    pub prompt_genre: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Debug)]
pub struct ChapterRepository {
    db: Arc<DatabaseConnection>,
}

impl ChapterRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create(&self, chapter: NewChapter) -> Result<domain::chapter::entity::Model> {
        let chapter = domain::chapter::entity::ActiveModel {
            novel_id: Set(chapter.novel_id),
            title: Set(chapter.title),
            content: Set(chapter.content),
            prompt_text: Set(chapter.prompt_text),
            prompt_genre: Set(chapter.prompt_genre),
            created_at: Set(chapter.created_at),
            ..Default::default()
        };
        let chapter = chapter.insert(self.db.as_ref()).await?;
        Ok(chapter)
    }

    pub async fn find_all_by_novel_id(
        &self,
        novel_id: &i32,
    ) -> Result<Vec<domain::chapter::entity::Model>> {
        let chapters = domain::chapter::entity::Entity::find()
            .filter(domain::chapter::entity::Column::NovelId.eq(*novel_id))
            .order_by_asc(domain::chapter::entity::Column::CreatedAt)
            .order_by_asc(domain::chapter::entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(chapters)
    }
}
