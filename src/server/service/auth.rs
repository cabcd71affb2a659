//! Account registration and credential checks.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        role::{ROLE_ADMIN, ROLE_USER},
        user::{CreateUserParams, SignInParams, SignUpParams, User},
    },
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The account gets the `user` role, unless nobody holds the `admin` role yet, in
    /// which case it becomes the first admin.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError::InternalErr)` - Default roles are missing or hashing failed
    pub async fn sign_up(&self, params: SignUpParams) -> Result<User, AppError> {
        let role_repo = RoleRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let admin_role = role_repo.find_by_name(ROLE_ADMIN).await?;
        let admin_missing = match &admin_role {
            Some(admin) => user_repo.count_by_role(admin.id).await? == 0,
            None => false,
        };

        let role_id = match admin_role {
            Some(admin) if admin_missing => {
                tracing::info!("No admin exists yet, registering first user as admin");
                admin.id
            }
            _ => {
                role_repo
                    .find_by_name(ROLE_USER)
                    .await?
                    .ok_or_else(|| InternalError::MissingRole(ROLE_USER.to_string()))?
                    .id
            }
        };

        let hashed = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                password_hash: hashed.hash,
                password_salt: hashed.salt,
                role_id,
            })
            .await?;

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails, accounts without a password and wrong passwords all yield the
    /// same `InvalidCredentials` error.
    pub async fn sign_in(&self, params: SignInParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(hash) = credentials.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}
