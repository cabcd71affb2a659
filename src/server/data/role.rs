//! Role data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::server::model::role::Role;

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a role by its name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let role = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(role.map(Role::from_entity))
    }

    /// Gets the ids of every role whose name is in `names`.
    ///
    /// Used by the authorization guard to compare a user's `roleId` against the
    /// admin and manager roles.
    pub async fn find_ids_by_names(&self, names: &[&str]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Role::find()
            .select_only()
            .column(entity::role::Column::Id)
            .filter(entity::role::Column::Name.is_in(names.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Returns the named role, inserting it with `permissions` if it doesn't exist yet.
    ///
    /// Existing roles keep their stored permissions.
    pub async fn ensure(&self, name: &str, permissions: &str) -> Result<Role, DbErr> {
        if let Some(role) = self.find_by_name(name).await? {
            return Ok(role);
        }

        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            permissions: ActiveValue::Set(permissions.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(role))
    }
}
