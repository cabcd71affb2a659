use super::*;

/// Tests that new pages start drafted with the creator as sole contributor.
///
/// Expected: Ok with status drafted, no timestamp, contributors [creator]
#[tokio::test]
async fn creates_drafted_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;

    let repo = PageRepository::new(db);
    let entity = repo.create(creator.id, create_params("welcome")).await?;
    let page = Page::from_entity(entity)?;

    assert_eq!(page.status, PageStatus::Drafted);
    assert_eq!(page.published_timestamp, None);
    assert_eq!(page.creator_id, creator.id);
    assert_eq!(page.contributors, vec![creator.id]);
    assert_eq!(page.url_slug, "welcome");

    Ok(())
}

/// Tests that a second page with the same slug is rejected.
///
/// Expected: Err mapped to AppError::Conflict
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;

    let repo = PageRepository::new(db);
    repo.create(creator.id, create_params("welcome")).await?;
    let result = repo.create(creator.id, create_params("welcome")).await;

    let err = AppError::from(result.unwrap_err());
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
