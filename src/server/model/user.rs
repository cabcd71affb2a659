//! User domain models and parameter types.
//!
//! `User` deliberately has no password fields: anything built from it is safe to
//! return to clients. Password material only travels through `UserCredentials`
//! and `CreateUserParams`.

use crate::{
    model::user::{SignInDto, SignUpDto, UpdateUserDto, UserDto},
    server::{
        error::validation::ValidationError,
        model::role::Role,
        validation::{Presence, Validator},
    },
};

/// A user without password material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: i32,
    /// Eagerly loaded role, when the query fetched it.
    pub role: Option<Role>,
}

impl User {
    /// Converts an entity model into a user, dropping the password hash and salt.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role_id: entity.role_id,
            role: None,
        }
    }

    /// Converts a user joined with its role.
    pub fn from_entity_with_role(
        entity: entity::user::Model,
        role: Option<entity::role::Model>,
    ) -> Self {
        Self {
            role: role.map(Role::from_entity),
            ..Self::from_entity(entity)
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role_id: self.role_id,
            role: self.role.map(Role::into_dto),
        }
    }
}

/// Stored password material for a user, used only during sign-in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: Option<String>,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub role_id: i32,
}

/// Partial user update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let first_name = validator.name("firstName", dto.first_name.as_deref(), Presence::Optional);
        let last_name = validator.name("lastName", dto.last_name.as_deref(), Presence::Optional);
        let email = validator.email("email", dto.email.as_deref(), Presence::Optional);

        validator.finish()?;

        Ok(Self {
            first_name,
            last_name,
            email,
        })
    }
}

/// Validated registration input. The password is still plain text here.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignUpParams {
    pub fn from_dto(dto: SignUpDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let first_name = validator.name("firstName", dto.first_name.as_deref(), Presence::Required);
        let last_name = validator.name("lastName", dto.last_name.as_deref(), Presence::Required);
        let email = validator.email("email", dto.email.as_deref(), Presence::Required);
        let password = validator.password("password", dto.password.as_deref());

        validator.finish()?;

        Ok(Self {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignInParams {
    pub email: String,
    pub password: String,
}

impl SignInParams {
    /// Only checks presence and email shape; password rules apply at sign-up.
    pub fn from_dto(dto: SignInDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let email = validator.email("email", dto.email.as_deref(), Presence::Required);
        let password = validator.required("password", dto.password.as_deref());

        validator.finish()?;

        Ok(Self {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}
