use std::sync::Arc;

use crate::domain;
use crate::error::{ErrorBackend, Result};
use sea_orm::prelude::DateTimeUtc;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// Persistence for generated prompts.
///
/// `insert` enforces no uniqueness; callers that care pre-check with
/// `exists` or use `insert_if_absent`.
#[derive(Clone, Debug)]
pub struct PromptRepository {
    db: Arc<DatabaseConnection>,
}

impl PromptRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Exact match on both genre and text.
    pub async fn exists(&self, genre: &str, text: &str) -> Result<bool> {
        let count = domain::prompt::entity::Entity::find()
            .filter(domain::prompt::entity::Column::Genre.eq(genre))
            .filter(domain::prompt::entity::Column::Text.eq(text))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    pub async fn insert(
        &self,
        genre: &str,
        text: &str,
        created_at: DateTimeUtc,
    ) -> Result<domain::prompt::entity::Model> {
        let prompt = domain::prompt::entity::ActiveModel {
            genre: Set(genre.to_string()),
            text: Set(text.to_string()),
            created_at: Set(created_at),
            ..Default::default()
        };
        let prompt = prompt.insert(self.db.as_ref()).await?;
        Ok(prompt)
    }

    /// Inserts unless an identical (genre, text) row exists, as one
    /// `INSERT ... SELECT ... WHERE NOT EXISTS` statement. Returns whether a
    /// row was written.
    pub async fn insert_if_absent(
        &self,
        genre: &str,
        text: &str,
        created_at: DateTimeUtc,
    ) -> Result<bool> {
        let duplicate = Query::select()
            .expr(Expr::val(1))
            .from(domain::prompt::entity::Entity)
            .and_where(domain::prompt::entity::Column::Genre.eq(genre))
            .and_where(domain::prompt::entity::Column::Text.eq(text))
            .to_owned();
        let source = Query::select()
            .expr(Expr::val(genre))
            .expr(Expr::val(text))
            .expr(Expr::val(created_at))
            .and_where(Expr::exists(duplicate).not())
            .to_owned();
        let insert = Query::insert()
            .into_table(domain::prompt::entity::Entity)
            .columns([
                domain::prompt::entity::Column::Genre,
                domain::prompt::entity::Column::Text,
                domain::prompt::entity::Column::CreatedAt,
            ])
            .select_from(source)
            .map_err(|e| ErrorBackend::FailedToPersist(e.to_string()))?
            .to_owned();

        let backend = self.db.get_database_backend();
        let result = self.db.execute(backend.build(&insert)).await?;
        Ok(result.rows_affected() > 0)
    }

    /// One uniformly random prompt of the genre.
    pub async fn sample_random(
        &self,
        genre: &str,
    ) -> Result<Option<domain::prompt::entity::Model>> {
        let prompt = domain::prompt::entity::Entity::find()
            .filter(domain::prompt::entity::Column::Genre.eq(genre))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(self.db.as_ref())
            .await?;
        Ok(prompt)
    }

    /// Newest first; `genre` filters by exact match.
    pub async fn find_all(&self, genre: Option<&str>) -> Result<Vec<domain::prompt::entity::Model>> {
        let mut query = domain::prompt::entity::Entity::find();
        if let Some(genre) = genre {
            query = query.filter(domain::prompt::entity::Column::Genre.eq(genre));
        }
        let prompts = query
            .order_by_desc(domain::prompt::entity::Column::CreatedAt)
            .order_by_desc(domain::prompt::entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(prompts)
    }
}
