use super::*;

/// Tests a session holding an existing user.
///
/// Expected: Ok(Some) with that user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user_with_role(db, "manager").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let viewer = AuthGuard::new(db, session).viewer().await?;

    assert_eq!(viewer.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests a session referencing a user that was deleted.
///
/// Expected: Ok(None) and the session no longer holds a user
#[tokio::test]
async fn treats_deleted_session_user_as_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let viewer = AuthGuard::new(db, session).viewer().await?;

    assert!(viewer.is_none());
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}
