use sea_orm::entity::prelude::*;
use serde::Serialize;
use ww_core::types::prompt::Prompt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "prompt")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub genre: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub trait IntoPrompt {
    fn into_prompt(self) -> Prompt;
}

impl IntoPrompt for Model {
    fn into_prompt(self) -> Prompt {
        Prompt {
            id: self.id,
            genre: self.genre,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

pub trait IntoPrompts {
    fn into_prompts(self) -> Vec<Prompt>;
}

impl IntoPrompts for Vec<Model> {
    fn into_prompts(self) -> Vec<Prompt> {
        self.into_iter().map(IntoPrompt::into_prompt).collect()
    }
}
