use super::*;

/// Tests that a user may act on their own account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_self() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user_with_role(db, "user").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests that an admin may act on another account.
///
/// Expected: Ok(User) for the admin
#[tokio::test]
async fn grants_access_to_admin_for_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user_with_role(db, "admin").await?;
    let other = factory::create_user_with_role(db, "user").await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await?;

    assert_eq!(result.id, admin.id);

    Ok(())
}

/// Tests that a non-admin can't act on another account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::create_user_with_role(db, "manager").await?;
    let other = factory::create_user_with_role(db, "user").await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
