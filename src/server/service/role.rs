use sea_orm::DatabaseConnection;

use crate::server::{
    data::role::RoleRepository,
    error::AppError,
    model::role::{Role, DEFAULT_ROLES},
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes sure the admin, manager and user roles exist.
    ///
    /// Safe to run on every startup; roles that already exist are left as they are.
    pub async fn seed_defaults(&self) -> Result<Vec<Role>, AppError> {
        let role_repo = RoleRepository::new(self.db);

        let mut roles = Vec::with_capacity(DEFAULT_ROLES.len());
        for (name, permissions) in DEFAULT_ROLES {
            roles.push(role_repo.ensure(name, permissions).await?);
        }

        Ok(roles)
    }
}
