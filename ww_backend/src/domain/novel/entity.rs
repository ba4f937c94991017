use sea_orm::entity::prelude::*;
use serde::Serialize;
use ww_core::types::novel::Novel;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "novel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub genre: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub is_prompt_journal: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::chapter::entity::Entity")]
    Chapter,
}

impl Related<crate::domain::chapter::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub trait IntoNovel {
    fn into_novel(self) -> Novel;
}

impl IntoNovel for Model {
    fn into_novel(self) -> Novel {
        Novel {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            genre: self.genre,
            summary: self.summary,
            is_prompt_journal: self.is_prompt_journal,
            created_at: self.created_at,
        }
    }
}
