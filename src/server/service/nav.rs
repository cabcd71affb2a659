use sea_orm::DatabaseConnection;

use crate::server::{
    data::{nav::NavMenuRepository, page::PageRepository},
    error::{validation::ValidationError, AppError},
    model::nav::{CreateNavMenuParams, NavMenu, UpdateNavMenuParams},
};

pub struct NavMenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavMenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNavMenuParams) -> Result<NavMenu, AppError> {
        self.ensure_pages_exist(&params.page_ids()).await?;

        let entity = NavMenuRepository::new(self.db).create(params).await?;

        Ok(NavMenu::from_entity(entity)?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<NavMenu, AppError> {
        let Some(entity) = NavMenuRepository::new(self.db).find_by_id(id).await? else {
            return Err(nav_not_found(id));
        };

        Ok(NavMenu::from_entity(entity)?)
    }

    pub async fn update(&self, id: i32, params: UpdateNavMenuParams) -> Result<NavMenu, AppError> {
        self.ensure_pages_exist(&params.page_ids()).await?;

        let Some(entity) = NavMenuRepository::new(self.db).update(id, params).await? else {
            return Err(nav_not_found(id));
        };

        Ok(NavMenu::from_entity(entity)?)
    }

    /// Deletes a menu, returning it as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<NavMenu, AppError> {
        let menu = self.get_by_id(id).await?;

        if NavMenuRepository::new(self.db).delete(id).await? == 0 {
            return Err(nav_not_found(id));
        }

        Ok(menu)
    }

    /// Rejects entries pointing at pages that don't exist.
    async fn ensure_pages_exist(&self, page_ids: &[i32]) -> Result<(), AppError> {
        let existing = PageRepository::new(self.db)
            .find_existing_ids(page_ids)
            .await?;

        let mut missing: Vec<i32> = page_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();

        if missing.is_empty() {
            return Ok(());
        }

        let missing = missing
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Err(ValidationError::field("pages_list", format!("unknown page ids: {}", missing)).into())
    }
}

fn nav_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Navigation menu {} not found", id))
}
