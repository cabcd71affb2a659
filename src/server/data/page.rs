use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::page::PageStatus,
    server::model::page::{CreatePageParams, PageVisibility, UpdatePageParams},
};

pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a drafted page with its creator as the only contributor
    pub async fn create(
        &self,
        creator_id: i32,
        params: CreatePageParams,
    ) -> Result<entity::page::Model, DbErr> {
        entity::page::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            url_slug: ActiveValue::Set(params.url_slug),
            published_timestamp: ActiveValue::Set(None),
            status: ActiveValue::Set(PageStatus::Drafted.as_str().to_string()),
            creator_id: ActiveValue::Set(creator_id),
            contributors: ActiveValue::Set(Some(serde_json::json!([creator_id]))),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a page by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::page::Model>, DbErr> {
        entity::prelude::Page::find_by_id(id).one(self.db).await
    }

    /// Gets a page by ID together with its creator
    pub async fn find_by_id_with_creator(
        &self,
        id: i32,
    ) -> Result<Option<(entity::page::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Page::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Gets a window of pages matching `visibility`, ordered by id, with creators
    pub async fn get_visible_paginated(
        &self,
        visibility: PageVisibility,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<(entity::page::Model, Option<entity::user::Model>)>, DbErr> {
        let query = match visibility {
            PageVisibility::OwnDrafts(user_id) => entity::prelude::Page::find()
                .filter(entity::page::Column::CreatorId.eq(user_id))
                .filter(entity::page::Column::Status.eq(PageStatus::Drafted.as_str())),
            PageVisibility::Published => entity::prelude::Page::find()
                .filter(entity::page::Column::Status.eq(PageStatus::Published.as_str())),
        };

        query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::page::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Applies a partial update to a previously fetched page.
    ///
    /// Publishing stamps the current time, drafting clears the timestamp. The
    /// contributor list is replaced with `contributors`.
    pub async fn update(
        &self,
        existing: entity::page::Model,
        params: UpdatePageParams,
        contributors: Vec<i32>,
    ) -> Result<entity::page::Model, DbErr> {
        let mut active_model: entity::page::ActiveModel = existing.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(status) = params.status {
            let published_timestamp = match status {
                PageStatus::Published => Some(Utc::now().to_rfc3339()),
                PageStatus::Drafted => None,
            };
            active_model.status = ActiveValue::Set(status.as_str().to_string());
            active_model.published_timestamp = ActiveValue::Set(published_timestamp);
        }
        active_model.contributors = ActiveValue::Set(Some(serde_json::json!(contributors)));

        active_model.update(self.db).await
    }

    /// Deletes a page, returning the number of deleted rows
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Page::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Returns which of `ids` belong to existing pages
    pub async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Page::find()
            .select_only()
            .column(entity::page::Column::Id)
            .filter(entity::page::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
