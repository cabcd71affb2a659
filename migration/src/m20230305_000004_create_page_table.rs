use sea_orm_migration::{prelude::*, schema::*};

use super::m20230304_000001_create_user_and_role_tables::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(pk_auto(Page::Id))
                    .col(text(Page::Title))
                    .col(text(Page::Content))
                    .col(text_uniq(Page::UrlSlug))
                    .col(text_null(Page::PublishedTimestamp))
                    .col(text(Page::Status))
                    .col(integer(Page::CreatorId))
                    .col(json_binary_null(Page::Contributors))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pages_creator_id")
                            .from(Page::Table, Page::CreatorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Page {
    #[sea_orm(iden = "pages")]
    Table,
    Id,
    Title,
    Content,
    #[sea_orm(iden = "urlSlug")]
    UrlSlug,
    #[sea_orm(iden = "publishedTimestamp")]
    PublishedTimestamp,
    Status,
    #[sea_orm(iden = "creatorId")]
    CreatorId,
    Contributors,
}
