use super::*;

/// Tests resolving the privileged role names to their ids.
///
/// Expected: Ok with exactly the admin and manager ids
#[tokio::test]
async fn returns_ids_of_named_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roles = factory::create_default_roles(db).await?;

    let repo = RoleRepository::new(db);
    let mut ids = repo.find_ids_by_names(&[ROLE_ADMIN, ROLE_MANAGER]).await?;
    ids.sort();

    let mut expected = vec![roles.admin.id, roles.manager.id];
    expected.sort();
    assert_eq!(ids, expected);
    assert!(!ids.contains(&roles.user.id));

    Ok(())
}

/// Tests that unknown role names resolve to nothing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_roles_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db, ROLE_USER, "").await?;

    let repo = RoleRepository::new(db);
    let ids = repo.find_ids_by_names(&[ROLE_ADMIN]).await?;

    assert!(ids.is_empty());

    Ok(())
}
