use super::*;

/// Tests renaming a menu without touching its entries.
///
/// Expected: Ok(Some) with the new name and the original entries
#[tokio::test]
async fn rename_keeps_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_nav_menu(db, &[3, 4]).await?;

    let repo = NavMenuRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            UpdateNavMenuParams {
                name: Some("Renamed".to_string()),
                pages_list: None,
            },
        )
        .await?
        .unwrap();
    let menu = NavMenu::from_entity(updated)?;

    assert_eq!(menu.name, "Renamed");
    assert_eq!(
        menu.pages_list.iter().map(|e| e.page_id).collect::<Vec<_>>(),
        vec![3, 4]
    );

    Ok(())
}

/// Tests replacing the entries.
///
/// Expected: Ok(Some) with the new entries
#[tokio::test]
async fn replaces_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_nav_menu(db, &[3]).await?;

    let repo = NavMenuRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            UpdateNavMenuParams {
                name: None,
                pages_list: Some(vec![entry(8, "Contact")]),
            },
        )
        .await?
        .unwrap();

    assert_eq!(
        NavMenu::from_entity(updated)?.pages_list,
        vec![entry(8, "Contact")]
    );

    Ok(())
}

/// Tests updating a menu that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NavMenuRepository::new(db);
    let result = repo
        .update(
            12,
            UpdateNavMenuParams {
                name: Some("Ghost".to_string()),
                pages_list: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
