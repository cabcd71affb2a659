use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the stored user returned without password material
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roles = factory::create_default_roles(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_params("ada@example.com", roles.user.id))
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role_id, roles.user.id);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password_hash.as_deref(), Some("hash"));
    assert_eq!(stored.password_salt.as_deref(), Some("salt"));

    Ok(())
}

/// Tests that a second user with the same email is rejected as a conflict.
///
/// Expected: Err mapped to AppError::Conflict
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roles = factory::create_default_roles(db).await?;

    let repo = UserRepository::new(db);
    repo.create(create_params("ada@example.com", roles.user.id))
        .await?;
    let result = repo
        .create(create_params("ada@example.com", roles.user.id))
        .await;

    let err = AppError::from(result.unwrap_err());
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

/// Tests that a user can't reference a role that doesn't exist.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.create(create_params("ada@example.com", 999)).await;

    assert!(result.is_err());

    Ok(())
}
