//! Role factory for creating test role entities.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// The three roles the application seeds at startup.
pub struct DefaultRoles {
    pub admin: entity::role::Model,
    pub manager: entity::role::Model,
    pub user: entity::role::Model,
}

/// Creates a role with the given name and permission string.
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_role(
    db: &DatabaseConnection,
    name: &str,
    permissions: &str,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        permissions: ActiveValue::Set(permissions.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Finds a role by name, creating it when missing.
async fn find_or_create_role(
    db: &DatabaseConnection,
    name: &str,
    permissions: &str,
) -> Result<entity::role::Model, DbErr> {
    let existing = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(role) => Ok(role),
        None => create_role(db, name, permissions).await,
    }
}

/// Creates the `admin`, `manager` and `user` roles if they don't exist yet.
///
/// Safe to call repeatedly within one test; existing roles are reused.
///
/// # Returns
/// - `Ok(DefaultRoles)` - The three roles
/// - `Err(DbErr)` - Database error during lookup or insert
pub async fn create_default_roles(db: &DatabaseConnection) -> Result<DefaultRoles, DbErr> {
    Ok(DefaultRoles {
        admin: find_or_create_role(db, "admin", "*").await?,
        manager: find_or_create_role(db, "manager", "pages:write,navs:write").await?,
        user: find_or_create_role(db, "user", "").await?,
    })
}
