use super::*;

/// Tests that only provided fields are overwritten.
///
/// Expected: Ok(Some) with first name changed and the rest preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "user").await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                first_name: Some("Grace".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, user.last_name);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests an update without any field.
///
/// Expected: Ok(Some) with the user unchanged
#[tokio::test]
async fn empty_update_returns_user_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "user").await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(user.id, UpdateUserParams::default())
        .await?
        .unwrap();

    assert_eq!(updated.first_name, user.first_name);

    Ok(())
}

/// Tests updating a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            7,
            UpdateUserParams {
                last_name: Some("Hopper".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests changing the email to one already in use.
///
/// Expected: Err mapped to AppError::Conflict
#[tokio::test]
async fn rejects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user_with_role(db, "user").await?;
    let second = factory::create_user_with_role(db, "user").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            second.id,
            UpdateUserParams {
                email: Some(first.email.clone()),
                ..Default::default()
            },
        )
        .await;

    let err = AppError::from(result.unwrap_err());
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
