use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NavMenu::Table)
                    .if_not_exists()
                    .col(pk_auto(NavMenu::Id))
                    .col(text(NavMenu::Name))
                    .col(json_binary_null(NavMenu::PagesList))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NavMenu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NavMenu {
    #[sea_orm(iden = "nav_menus")]
    Table,
    Id,
    Name,
    #[sea_orm(iden = "pages_list")]
    PagesList,
}
