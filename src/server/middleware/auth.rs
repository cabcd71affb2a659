//! Authentication and role based authorization for handlers.
//!
//! Handlers build an `AuthGuard` from the request's session and either ask for the
//! optional current user or `require` a set of permissions. Roles are resolved by
//! name, so a user is an admin when their `roleId` is the id of the role named
//! `admin`.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        role::{ROLE_ADMIN, ROLE_MANAGER},
        user::User,
    },
};

pub enum Permission {
    /// Holds the `admin` role.
    Admin,
    /// Holds the `admin` or the `manager` role.
    AdminOrManager,
    /// Is the given user, or holds the `admin` role.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Gets the signed in user, if any.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session holds an existing user
    /// - `Ok(None)` - Anonymous request
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Some(user))
    }

    /// Gets the signed in user for routes that also serve anonymous callers.
    ///
    /// A session pointing at a deleted user is cleared and treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session holds an existing user
    /// - `Ok(None)` - Anonymous request, or the session user no longer exists
    pub async fn viewer(&self) -> Result<Option<User>, AppError> {
        match self.current_user().await {
            Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
                tracing::debug!("Clearing session of deleted user {}", user_id);
                AuthSession::new(self.session).clear().await?;
                Ok(None)
            }
            result => result,
        }
    }

    /// Requires a signed in user satisfying every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed in user
    /// - `Err(AuthError::UserNotInSession)` - Anonymous request
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission isn't satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.current_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.has_role(&user, &[ROLE_ADMIN]).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::AdminOrManager => {
                    if !self.has_role(&user, &[ROLE_ADMIN, ROLE_MANAGER]).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted a content action without the admin or manager role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(target_id) => {
                    if user.id != *target_id && !self.has_role(&user, &[ROLE_ADMIN]).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to access user {} without the admin role",
                                target_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    async fn has_role(&self, user: &User, role_names: &[&str]) -> Result<bool, AppError> {
        let role_ids = RoleRepository::new(self.db)
            .find_ids_by_names(role_names)
            .await?;

        Ok(role_ids.contains(&user.role_id))
    }
}
