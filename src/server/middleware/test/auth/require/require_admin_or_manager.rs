use super::*;

/// Tests that both privileged roles pass.
///
/// Expected: Ok(User) for admin and manager
#[tokio::test]
async fn grants_access_to_admin_and_manager() -> Result<(), AppError> {
    for role in ["admin", "manager"] {
        let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session)
            .require(&[Permission::AdminOrManager])
            .await?;

        assert_eq!(result.id, user.id);
    }

    Ok(())
}

/// Tests that a regular user is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user_with_role(db, "user").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::AdminOrManager])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
