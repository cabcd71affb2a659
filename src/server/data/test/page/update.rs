use super::*;

/// Tests that patching only the title preserves the content.
///
/// Expected: Ok with new title and original content
#[tokio::test]
async fn partial_update_preserves_omitted_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;
    let existing = PageFactory::new(db, creator.id)
        .content("Original content")
        .build()
        .await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(
            existing,
            UpdatePageParams {
                title: Some("New title".to_string()),
                ..Default::default()
            },
            vec![creator.id],
        )
        .await?;

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "Original content");
    assert_eq!(updated.status, "drafted");

    Ok(())
}

/// Tests that publishing stamps the timestamp and drafting clears it.
///
/// Expected: Ok with timestamp set after publishing and cleared after drafting
#[tokio::test]
async fn status_change_drives_published_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;
    let existing = factory::create_page(db, creator.id).await?;

    let repo = PageRepository::new(db);
    let published = repo
        .update(
            existing,
            UpdatePageParams {
                status: Some(PageStatus::Published),
                ..Default::default()
            },
            vec![creator.id],
        )
        .await?;

    let page = Page::from_entity(published.clone())?;
    assert_eq!(page.status, PageStatus::Published);
    assert!(page.published_timestamp.is_some());

    let drafted = repo
        .update(
            published,
            UpdatePageParams {
                status: Some(PageStatus::Drafted),
                ..Default::default()
            },
            vec![creator.id],
        )
        .await?;

    let page = Page::from_entity(drafted)?;
    assert_eq!(page.status, PageStatus::Drafted);
    assert_eq!(page.published_timestamp, None);

    Ok(())
}

/// Tests that the contributor list is replaced with the given one.
///
/// Expected: Ok with both users listed as contributors
#[tokio::test]
async fn stores_contributors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;
    let editor = factory::create_user_with_role(db, "admin").await?;
    let existing = factory::create_page(db, creator.id).await?;

    let repo = PageRepository::new(db);
    let updated = repo
        .update(
            existing,
            UpdatePageParams::default(),
            vec![creator.id, editor.id],
        )
        .await?;

    let page = Page::from_entity(updated)?;
    assert_eq!(page.contributors, vec![creator.id, editor.id]);

    Ok(())
}
