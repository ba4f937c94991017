use sea_orm::entity::prelude::*;
use serde::Serialize;
use ww_core::types::chapter::Chapter;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "chapter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub novel_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub prompt_text: Option<String>,
    pub prompt_genre: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::novel::entity::Entity",
        from = "Column::NovelId",
        to = "crate::domain::novel::entity::Column::Id",
        on_delete = "Cascade"
    )]
    Novel,
}

impl Related<crate::domain::novel::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Novel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub trait IntoChapter {
    fn into_chapter(self) -> Chapter;
}

impl IntoChapter for Model {
    fn into_chapter(self) -> Chapter {
        Chapter {
            id: self.id,
            novel_id: self.novel_id,
            title: self.title,
            content: self.content,
            prompt_text: self.prompt_text,
            prompt_genre: self.prompt_genre,
            created_at: self.created_at,
        }
    }
}

pub trait IntoChapters {
    fn into_chapters(self) -> Vec<Chapter>;
}

impl IntoChapters for Vec<Model> {
    fn into_chapters(self) -> Vec<Chapter> {
        self.into_iter().map(IntoChapter::into_chapter).collect()
    }
}
