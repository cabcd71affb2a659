use super::*;

/// Tests an anonymous session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests a session holding an existing user.
///
/// Expected: Ok(Some) with that user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user_with_role(db, "user").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).current_user().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests a session referencing a user that was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn errors_when_session_user_was_deleted() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).current_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}
