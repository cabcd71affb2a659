use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(1) and the user is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "user").await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(user.id).await?, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that doesn't exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_user_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(99).await?, 0);

    Ok(())
}

/// Tests deleting a user who still owns pages.
///
/// Expected: Err mapped to AppError::Conflict from the foreign key
#[tokio::test]
async fn rejects_user_with_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "manager").await?;
    factory::create_page(db, user.id).await?;

    let repo = UserRepository::new(db);
    let result = repo.delete(user.id).await;

    let err = AppError::from(result.unwrap_err());
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
