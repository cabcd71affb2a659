pub use sea_orm_migration::prelude::*;

mod m20230304_000001_create_user_and_role_tables;
mod m20230304_000002_add_role_id_to_users;
mod m20230305_000003_add_permissions_to_roles;
mod m20230305_000004_create_page_table;
mod m20230305_000005_create_nav_menu_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230304_000001_create_user_and_role_tables::Migration),
            Box::new(m20230304_000002_add_role_id_to_users::Migration),
            Box::new(m20230305_000003_add_permissions_to_roles::Migration),
            Box::new(m20230305_000004_create_page_table::Migration),
            Box::new(m20230305_000005_create_nav_menu_table::Migration),
        ]
    }
}
