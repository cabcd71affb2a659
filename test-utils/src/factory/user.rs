//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern and stores a real argon2 hash so sign-in flows can
//! be exercised end to end.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Plain-text password given to every factory user unless overridden.
pub const DEFAULT_PASSWORD: &str = "correct-horse-battery";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, roles.admin.id)
///     .email("admin@example.com")
///     .first_name("Ada")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role_id: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`]
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `role_id` - Id of an existing role
    pub fn new(db: &'a DatabaseConnection, role_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            role_id,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing failed or database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(Some(hash)),
            password_salt: ActiveValue::Set(Some(salt.as_str().to_string())),
            role_id: ActiveValue::Set(self.role_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values holding the given role.
///
/// Shorthand for `UserFactory::new(db, role_id).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    role_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, role_id).build().await
}
