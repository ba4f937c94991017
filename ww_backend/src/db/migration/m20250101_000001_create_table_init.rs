use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prompt::Table)
                    .if_not_exists()
                    .col(pk_auto(Prompt::Id))
                    .col(string(Prompt::Genre))
                    .col(text(Prompt::Text))
                    .col(
                        ColumnDef::new(Prompt::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Fallback sampling and listing both filter on genre.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prompt_genre")
                    .table(Prompt::Table)
                    .col(Prompt::Genre)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Novel::Table)
                    .if_not_exists()
                    .col(pk_auto(Novel::Id))
                    .col(integer(Novel::UserId))
                    .col(string(Novel::Title))
                    .col(string_null(Novel::Genre))
                    .col(text_null(Novel::Summary))
                    .col(boolean(Novel::IsPromptJournal).default(false))
                    .col(
                        ColumnDef::new(Novel::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Chapter::Table)
                    .if_not_exists()
                    .col(pk_auto(Chapter::Id))
                    .col(integer(Chapter::NovelId))
                    .col(string(Chapter::Title))
                    .col(text(Chapter::Content))
                    .col(text_null(Chapter::PromptText))
                    .col(string_null(Chapter::PromptGenre))
                    .col(
                        ColumnDef::new(Chapter::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chapter_novel")
                            .from(Chapter::Table, Chapter::NovelId)
                            .to(Novel::Table, Novel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chapter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Novel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prompt::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Prompt {
    Table,
    Id,
    Genre,
    Text,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Novel {
    Table,
    Id,
    UserId,
    Title,
    Genre,
    Summary,
    IsPromptJournal,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Chapter {
    Table,
    Id,
    NovelId,
    Title,
    Content,
    PromptText,
    PromptGenre,
    CreatedAt,
}
