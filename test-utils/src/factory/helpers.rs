//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{role::create_default_roles, user::UserFactory};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails and slugs
/// across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds the default roles and creates a user holding the named role.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - One of `admin`, `manager` or `user`
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user
/// - `Err(DbErr)` - Unknown role name or database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<entity::user::Model, DbErr> {
    let roles = create_default_roles(db).await?;

    let role = match role_name {
        "admin" => roles.admin,
        "manager" => roles.manager,
        "user" => roles.user,
        other => return Err(DbErr::Custom(format!("Unknown role '{}'", other))),
    };

    UserFactory::new(db, role.id).build().await
}
