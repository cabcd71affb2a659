use super::*;

/// Tests inserting a role that doesn't exist yet.
///
/// Expected: Ok with the role stored using the given permissions
#[tokio::test]
async fn inserts_missing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let role = repo.ensure(ROLE_MANAGER, "pages:write,navs:write").await?;

    assert_eq!(role.name, ROLE_MANAGER);
    assert_eq!(role.permissions, vec!["pages:write", "navs:write"]);
    assert_eq!(Role::find().count(db).await?, 1);

    Ok(())
}

/// Tests that ensuring an existing role neither duplicates nor modifies it.
///
/// Expected: Ok with the original role returned and one row stored
#[tokio::test]
async fn keeps_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Role).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_role(db, ROLE_ADMIN, "*").await?;

    let repo = RoleRepository::new(db);
    let role = repo.ensure(ROLE_ADMIN, "something-else").await?;

    assert_eq!(role.id, existing.id);
    assert_eq!(role.permissions, vec!["*"]);
    assert_eq!(Role::find().count(db).await?, 1);

    Ok(())
}
