use super::*;

/// Tests deleting an existing page.
///
/// Expected: Ok(1) and the page is gone
#[tokio::test]
async fn deletes_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;
    let page = factory::create_page(db, creator.id).await?;

    let repo = PageRepository::new(db);

    assert_eq!(repo.delete(page.id).await?, 1);
    assert!(repo.find_by_id(page.id).await?.is_none());

    Ok(())
}

/// Tests deleting a page that doesn't exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_page_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageRepository::new(db);

    assert_eq!(repo.delete(5).await?, 0);

    Ok(())
}
