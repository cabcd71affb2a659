use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user_with_role(db, "admin").await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests that a manager is not an admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::create_user_with_role(db, "manager").await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, manager.id);
            assert!(message.contains("admin"));
        }
        _ => panic!("Expected AccessDenied error"),
    }

    Ok(())
}

/// Tests that the role is compared by role id, not by user id.
///
/// A regular user whose own id happens to equal the admin role id must still
/// be denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn compares_role_id_not_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let roles = factory::create_default_roles(db).await?;
    let user = factory::create_user(db, roles.user.id).await?;
    assert_eq!(user.id, roles.admin.id);

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
