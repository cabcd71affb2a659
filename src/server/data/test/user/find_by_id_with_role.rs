use super::*;

/// Tests that the role is attached when fetching a user.
///
/// Expected: Ok(Some) with role populated
#[tokio::test]
async fn attaches_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, "admin").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id_with_role(admin.id).await?.unwrap();

    let role = user.role.unwrap();
    assert_eq!(role.id, admin.role_id);
    assert_eq!(role.name, "admin");

    Ok(())
}

/// Tests fetching a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id_with_role(42).await?.is_none());
    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
