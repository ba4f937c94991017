use std::sync::Arc;

use crate::domain;
use crate::error::Result;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Fields of a journal novel about to be created.
#[derive(Debug, Clone)]
pub struct NewPromptJournal {
    pub user_id: i32,
    pub title: String,
    pub genre: String,
    pub summary: String,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Debug)]
pub struct NovelRepository {
    db: Arc<DatabaseConnection>,
}

impl NovelRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &i32) -> Result<Option<domain::novel::entity::Model>> {
        let novel = domain::novel::entity::Entity::find_by_id(*id)
            .one(self.db.as_ref())
            .await?;
        Ok(novel)
    }

    /// Oldest journal of the user, if any.
    pub async fn find_prompt_journal(
        &self,
        user_id: &i32,
    ) -> Result<Option<domain::novel::entity::Model>> {
        let novel = domain::novel::entity::Entity::find()
            .filter(domain::novel::entity::Column::UserId.eq(*user_id))
            .filter(domain::novel::entity::Column::IsPromptJournal.eq(true))
            .order_by_asc(domain::novel::entity::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(novel)
    }

    pub async fn create_prompt_journal(
        &self,
        journal: NewPromptJournal,
    ) -> Result<domain::novel::entity::Model> {
        let novel = domain::novel::entity::ActiveModel {
            user_id: Set(journal.user_id),
            title: Set(journal.title),
            genre: Set(Some(journal.genre)),
            summary: Set(Some(journal.summary)),
            is_prompt_journal: Set(true),
            created_at: Set(journal.created_at),
            ..Default::default()
        };
        let novel = novel.insert(self.db.as_ref()).await?;
        Ok(novel)
    }
}
