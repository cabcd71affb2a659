//! Page domain models and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::page::{CreatePageDto, PageDto, PageStatus, UpdatePageDto},
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::user::User,
        util::parse::{parse_contributors, parse_page_status, parse_published_timestamp},
        validation::{Presence, Validator},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub url_slug: String,
    pub published_timestamp: Option<DateTime<Utc>>,
    pub status: PageStatus,
    pub creator_id: i32,
    pub contributors: Vec<i32>,
    /// Eagerly loaded creator, when the query fetched it.
    pub creator: Option<User>,
}

impl Page {
    /// Converts an entity model, parsing the text and JSON columns.
    ///
    /// # Returns
    /// - `Ok(Page)` - Converted page
    /// - `Err(InternalError)` - Stored status, timestamp or contributors are malformed
    pub fn from_entity(entity: entity::page::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            url_slug: entity.url_slug,
            published_timestamp: parse_published_timestamp(entity.published_timestamp)?,
            status: parse_page_status(&entity.status)?,
            creator_id: entity.creator_id,
            contributors: parse_contributors(entity.contributors)?,
            creator: None,
        })
    }

    /// Converts a page joined with its creator.
    pub fn from_entity_with_creator(
        entity: entity::page::Model,
        creator: Option<entity::user::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            creator: creator.map(User::from_entity),
            ..Self::from_entity(entity)?
        })
    }

    pub fn is_visible_to(&self, viewer_id: Option<i32>) -> bool {
        self.status == PageStatus::Published || viewer_id == Some(self.creator_id)
    }

    /// Contributors after `editor_id` touched the page, without duplicates.
    pub fn contributors_with(&self, editor_id: i32) -> Vec<i32> {
        let mut contributors = self.contributors.clone();
        if !contributors.contains(&editor_id) {
            contributors.push(editor_id);
        }
        contributors
    }

    pub fn into_dto(self) -> PageDto {
        PageDto {
            id: self.id,
            title: self.title,
            content: self.content,
            url_slug: self.url_slug,
            published_timestamp: self.published_timestamp,
            status: self.status,
            creator_id: self.creator_id,
            contributors: self.contributors,
            creator: self.creator.map(User::into_dto),
        }
    }
}

/// Which pages a list request may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVisibility {
    /// Drafts created by the given user.
    OwnDrafts(i32),
    /// Published pages of any creator.
    Published,
}

impl PageVisibility {
    pub fn for_viewer(viewer_id: Option<i32>) -> Self {
        match viewer_id {
            Some(user_id) => Self::OwnDrafts(user_id),
            None => Self::Published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePageParams {
    pub title: String,
    pub content: String,
    pub url_slug: String,
}

impl CreatePageParams {
    pub fn from_dto(dto: CreatePageDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let title = validator.name("title", dto.title.as_deref(), Presence::Required);
        let content = validator.content("content", dto.content.as_deref(), Presence::Required);
        let url_slug = validator.slug("urlSlug", dto.url_slug.as_deref(), Presence::Required);

        validator.finish()?;

        Ok(Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            url_slug: url_slug.unwrap_or_default(),
        })
    }
}

/// Partial page update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePageParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PageStatus>,
}

impl UpdatePageParams {
    pub fn from_dto(dto: UpdatePageDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let title = validator.name("title", dto.title.as_deref(), Presence::Optional);
        let content = validator.content("content", dto.content.as_deref(), Presence::Optional);
        let status = validator.page_status("status", dto.status.as_deref());

        validator.finish()?;

        Ok(Self {
            title,
            content,
            status,
        })
    }
}
