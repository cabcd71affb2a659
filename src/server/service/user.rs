//! User service for business logic.
//!
//! Wraps `UserRepository`, turning missing rows into `AppError::NotFound` and
//! attaching roles to every returned user.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::Pagination,
        user::{UpdateUserParams, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users with their roles.
    pub async fn get_paginated(&self, pagination: Pagination) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db)
            .get_paginated(pagination.limit, pagination.offset)
            .await?;

        Ok(users)
    }

    /// Gets a user with their role.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id_with_role(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Applies a partial update and returns the user with their role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - The new email is taken
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.update(id, params).await?.is_none() {
            return Err(user_not_found(id));
        }

        self.get_by_id(id).await
    }

    /// Deletes a user, returning the snapshot taken before deletion.
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - The user still owns pages
    pub async fn delete(&self, id: i32) -> Result<User, AppError> {
        let user = self.get_by_id(id).await?;

        if UserRepository::new(self.db).delete(id).await? == 0 {
            return Err(user_not_found(id));
        }

        Ok(user)
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
