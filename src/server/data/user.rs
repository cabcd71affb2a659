//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Every method returns `User` domain models, which never carry password material;
//! only `find_credentials_by_email` exposes the stored hash for sign-in.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams, User, UserCredentials};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(Some(params.password_hash)),
            password_salt: ActiveValue::Set(Some(params.password_salt)),
            role_id: ActiveValue::Set(params.role_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id without loading the role.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by id with the role eagerly loaded.
    pub async fn find_by_id_with_role(&self, id: i32) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await?;

        Ok(result.map(|(user, role)| User::from_entity_with_role(user, role)))
    }

    /// Finds a user and their stored password hash by (normalized) email.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Gets a window of users ordered by id, each with its role.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users to return
    /// - `offset` - Number of users to skip
    pub async fn get_paginated(&self, limit: u64, offset: u64) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .find_also_related(entity::prelude::Role)
            .order_by_asc(entity::user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|(user, role)| User::from_entity_with_role(user, role))
            .collect())
    }

    /// Overwrites the provided fields of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user, unchanged if no field was provided
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = existing.clone().into();
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }

        if !active_model.is_changed() {
            return Ok(Some(User::from_entity(existing)));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 when the user didn't exist
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   user still owns pages
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Counts users holding the given role.
    pub async fn count_by_role(&self, role_id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::RoleId.eq(role_id))
            .count(self.db)
            .await
    }
}
