use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Publication state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Drafted,
    Published,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drafted => "drafted",
            Self::Published => "published",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "drafted" => Some(Self::Drafted),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub url_slug: String,
    pub published_timestamp: Option<DateTime<Utc>>,
    pub status: PageStatus,
    pub creator_id: i32,
    pub contributors: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub url_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageDto {
    pub title: Option<String>,
    pub content: Option<String>,
    /// `drafted` or `published`
    pub status: Option<String>,
}
