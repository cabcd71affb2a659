use sea_orm::DatabaseConnection;

use crate::server::{
    data::page::PageRepository,
    error::AppError,
    model::{
        page::{CreatePageParams, Page, PageVisibility, UpdatePageParams},
        pagination::Pagination,
    },
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a drafted page owned by `creator_id`.
    pub async fn create(&self, creator_id: i32, params: CreatePageParams) -> Result<Page, AppError> {
        let entity = PageRepository::new(self.db)
            .create(creator_id, params)
            .await?;

        Ok(Page::from_entity(entity)?)
    }

    /// Lists pages the viewer may see: their own drafts when signed in, published
    /// pages otherwise.
    pub async fn get_visible(
        &self,
        viewer_id: Option<i32>,
        pagination: Pagination,
    ) -> Result<Vec<Page>, AppError> {
        let pages = PageRepository::new(self.db)
            .get_visible_paginated(
                PageVisibility::for_viewer(viewer_id),
                pagination.limit,
                pagination.offset,
            )
            .await?;

        let pages = pages
            .into_iter()
            .map(|(page, creator)| Page::from_entity_with_creator(page, creator))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pages)
    }

    /// Gets a page if the viewer may see it.
    ///
    /// Drafts of other users are reported as not found so their existence isn't leaked.
    pub async fn get_by_id(&self, id: i32, viewer_id: Option<i32>) -> Result<Page, AppError> {
        let Some((page, creator)) = PageRepository::new(self.db)
            .find_by_id_with_creator(id)
            .await?
        else {
            return Err(page_not_found(id));
        };

        let page = Page::from_entity_with_creator(page, creator)?;
        if !page.is_visible_to(viewer_id) {
            return Err(page_not_found(id));
        }

        Ok(page)
    }

    /// Applies a partial update on behalf of `editor_id`, who becomes a contributor.
    pub async fn update(
        &self,
        id: i32,
        editor_id: i32,
        params: UpdatePageParams,
    ) -> Result<Page, AppError> {
        let page_repo = PageRepository::new(self.db);

        let Some(existing) = page_repo.find_by_id(id).await? else {
            return Err(page_not_found(id));
        };

        let contributors = Page::from_entity(existing.clone())?.contributors_with(editor_id);
        let updated = page_repo.update(existing, params, contributors).await?;

        Ok(Page::from_entity(updated)?)
    }

    /// Deletes a page, returning it as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<Page, AppError> {
        let page_repo = PageRepository::new(self.db);

        let Some(existing) = page_repo.find_by_id(id).await? else {
            return Err(page_not_found(id));
        };
        let page = Page::from_entity(existing)?;

        if page_repo.delete(id).await? == 0 {
            return Err(page_not_found(id));
        }

        Ok(page)
    }
}

fn page_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Page {} not found", id))
}
