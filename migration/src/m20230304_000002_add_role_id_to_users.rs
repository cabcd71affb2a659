use sea_orm_migration::{prelude::*, schema::*};

use super::m20230304_000001_create_user_and_role_tables::{Role, User};

const FK_USER_ROLE: &str = "fk_users_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .add_column(integer(User::RoleId))
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name(FK_USER_ROLE)
                            .from_tbl(User::Table)
                            .from_col(User::RoleId)
                            .to_tbl(Role::Table)
                            .to_col(Role::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .drop_foreign_key(Alias::new(FK_USER_ROLE))
                    .drop_column(User::RoleId)
                    .to_owned(),
            )
            .await
    }
}
