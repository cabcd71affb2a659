use super::*;

/// Tests that credentials expose the stored hash for sign-in.
///
/// Expected: Ok(Some) with a hash present
#[tokio::test]
async fn returns_hash_for_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "user").await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email(&user.email).await?.unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, user.password_hash);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}
