use super::*;

/// Tests that limit and offset select a window of users ordered by id.
///
/// Expected: Ok with the second and third users
#[tokio::test]
async fn returns_requested_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roles = factory::create_default_roles(db).await?;
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::create_user(db, roles.user.id).await?.id);
    }

    let repo = UserRepository::new(db);
    let users = repo.get_paginated(2, 1).await?;

    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![ids[1], ids[2]]
    );
    assert!(users.iter().all(|u| u.role.is_some()));

    Ok(())
}

/// Tests an offset past the end of the table.
///
/// Expected: Ok with no users
#[tokio::test]
async fn returns_empty_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_role(db, "user").await?;

    let repo = UserRepository::new(db);
    let users = repo.get_paginated(10, 5).await?;

    assert!(users.is_empty());

    Ok(())
}
