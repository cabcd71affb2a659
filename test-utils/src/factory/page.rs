//! Page factory for creating test page entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pages with customizable fields.
///
/// Pages default to `drafted` with the creator as the only contributor, matching
/// what the create route produces.
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    title: String,
    content: String,
    url_slug: String,
    status: String,
    published_timestamp: Option<String>,
}

impl<'a> PageFactory<'a> {
    /// Creates a new PageFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Page {id}"`
    /// - content: `"Content of page {id}"`
    /// - url_slug: `"page-{id}"`
    /// - status: `"drafted"`
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            title: format!("Page {}", id),
            content: format!("Content of page {}", id),
            url_slug: format!("page-{}", id),
            status: "drafted".to_string(),
            published_timestamp: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn url_slug(mut self, url_slug: impl Into<String>) -> Self {
        self.url_slug = url_slug.into();
        self
    }

    /// Marks the page as published with a fixed timestamp.
    pub fn published(mut self) -> Self {
        self.status = "published".to_string();
        self.published_timestamp = Some("2023-03-05T12:00:00+00:00".to_string());
        self
    }

    /// Builds and inserts the page entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::page::Model)` - Created page entity
    /// - `Err(DbErr)` - Database error during insert (unknown creator, duplicate slug)
    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        entity::page::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            url_slug: ActiveValue::Set(self.url_slug),
            published_timestamp: ActiveValue::Set(self.published_timestamp),
            status: ActiveValue::Set(self.status),
            creator_id: ActiveValue::Set(self.creator_id),
            contributors: ActiveValue::Set(Some(serde_json::json!([self.creator_id]))),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drafted page with default values.
pub async fn create_page(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db, creator_id).build().await
}
