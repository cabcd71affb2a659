use super::*;

/// Tests creating a menu with entries.
///
/// Expected: Ok with entries stored in order
#[tokio::test]
async fn creates_menu_with_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NavMenuRepository::new(db);
    let entity = repo
        .create(CreateNavMenuParams {
            name: "Main".to_string(),
            pages_list: vec![entry(1, "Home"), entry(2, "About")],
        })
        .await?;
    let menu = NavMenu::from_entity(entity)?;

    assert!(menu.id > 0);
    assert_eq!(menu.name, "Main");
    assert_eq!(menu.pages_list, vec![entry(1, "Home"), entry(2, "About")]);

    Ok(())
}

/// Tests creating a menu without entries.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn creates_empty_menu() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NavMenuRepository::new(db);
    let entity = repo
        .create(CreateNavMenuParams {
            name: "Footer".to_string(),
            pages_list: Vec::new(),
        })
        .await?;

    assert!(NavMenu::from_entity(entity)?.pages_list.is_empty());

    Ok(())
}
