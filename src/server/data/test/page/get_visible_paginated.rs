use super::*;

/// Tests that anonymous visibility returns every published page and no drafts.
///
/// Expected: Ok with only the published pages, creators attached
#[tokio::test]
async fn published_visibility_excludes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user_with_role(db, "manager").await?;
    let second = factory::create_user_with_role(db, "admin").await?;

    let published_a = PageFactory::new(db, first.id).published().build().await?;
    let published_b = PageFactory::new(db, second.id).published().build().await?;
    factory::create_page(db, first.id).await?;
    factory::create_page(db, second.id).await?;

    let repo = PageRepository::new(db);
    let pages = repo
        .get_visible_paginated(PageVisibility::Published, 10, 0)
        .await?;

    let ids: Vec<i32> = pages.iter().map(|(page, _)| page.id).collect();
    assert_eq!(ids, vec![published_a.id, published_b.id]);
    assert!(pages.iter().all(|(page, _)| page.status == "published"));
    assert!(pages
        .iter()
        .all(|(page, creator)| creator.as_ref().map(|c| c.id) == Some(page.creator_id)));

    Ok(())
}

/// Tests that authenticated visibility returns only the caller's drafts.
///
/// Expected: Ok with drafts created by the caller only
#[tokio::test]
async fn own_drafts_visibility_filters_by_creator_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user_with_role(db, "user").await?;
    let other = factory::create_user_with_role(db, "manager").await?;

    let own_draft = factory::create_page(db, caller.id).await?;
    PageFactory::new(db, caller.id).published().build().await?;
    factory::create_page(db, other.id).await?;

    let repo = PageRepository::new(db);
    let pages = repo
        .get_visible_paginated(PageVisibility::OwnDrafts(caller.id), 10, 0)
        .await?;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].0.id, own_draft.id);
    assert_eq!(pages[0].0.creator_id, caller.id);
    assert_eq!(pages[0].0.status, "drafted");

    Ok(())
}

/// Tests that limit and offset apply after filtering.
///
/// Expected: Ok with the second published page only
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_page_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user_with_role(db, "manager").await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(PageFactory::new(db, creator.id).published().build().await?.id);
    }

    let repo = PageRepository::new(db);
    let pages = repo
        .get_visible_paginated(PageVisibility::Published, 1, 1)
        .await?;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].0.id, ids[1]);

    Ok(())
}
