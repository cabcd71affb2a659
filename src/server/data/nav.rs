use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::nav::{CreateNavMenuParams, NavPageRef, UpdateNavMenuParams};

pub struct NavMenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavMenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a navigation menu
    pub async fn create(
        &self,
        params: CreateNavMenuParams,
    ) -> Result<entity::nav_menu::Model, DbErr> {
        entity::nav_menu::ActiveModel {
            name: ActiveValue::Set(params.name),
            pages_list: ActiveValue::Set(Some(entries_to_json(&params.pages_list)?)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a navigation menu by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::nav_menu::Model>, DbErr> {
        entity::prelude::NavMenu::find_by_id(id).one(self.db).await
    }

    /// Overwrites the provided fields, returning `None` when the menu doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateNavMenuParams,
    ) -> Result<Option<entity::nav_menu::Model>, DbErr> {
        let Some(existing) = entity::prelude::NavMenu::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::nav_menu::ActiveModel = existing.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(pages_list) = params.pages_list {
            active_model.pages_list = ActiveValue::Set(Some(entries_to_json(&pages_list)?));
        }

        if !active_model.is_changed() {
            return Ok(Some(existing));
        }

        active_model.update(self.db).await.map(Some)
    }

    /// Deletes a navigation menu, returning the number of deleted rows
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::NavMenu::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn entries_to_json(entries: &[NavPageRef]) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(entries).map_err(|e| DbErr::Json(e.to_string()))
}
