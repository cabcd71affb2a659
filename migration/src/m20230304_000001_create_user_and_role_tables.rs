use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(text(User::FirstName))
                    .col(text(User::LastName))
                    .col(text_uniq(User::Email))
                    .col(text_null(User::PasswordHash))
                    .col(text_null(User::PasswordSalt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(text(Role::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    #[sea_orm(iden = "firstName")]
    FirstName,
    #[sea_orm(iden = "lastName")]
    LastName,
    Email,
    #[sea_orm(iden = "passwordHash")]
    PasswordHash,
    #[sea_orm(iden = "passwordSalt")]
    PasswordSalt,
    #[sea_orm(iden = "roleId")]
    RoleId,
}

#[derive(DeriveIden)]
pub enum Role {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    Name,
    Permissions,
}
