//! Parsers for stored column values that the database can't type for us.
//!
//! Status, timestamps and the JSON columns are plain text or JSON in the schema. A
//! value that fails to parse means the row was written outside this application, so
//! every failure is an `InternalError` rather than a client error.

use chrono::{DateTime, Utc};
use sea_orm::prelude::Json;

use crate::{
    model::page::PageStatus,
    server::{error::internal::InternalError, model::nav::NavPageRef},
};

/// Parses the `pages.status` column.
///
/// # Returns
/// - `Ok(PageStatus)` - `drafted` or `published`
/// - `Err(InternalError::UnknownPageStatus)` - Any other value
pub fn parse_page_status(value: &str) -> Result<PageStatus, InternalError> {
    PageStatus::parse(value).ok_or_else(|| InternalError::UnknownPageStatus(value.to_string()))
}

/// Parses the RFC 3339 `pages.publishedTimestamp` column.
pub fn parse_published_timestamp(
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, InternalError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let timestamp = DateTime::parse_from_rfc3339(&value)
        .map_err(|e| InternalError::InvalidTimestamp { value, source: e })?;

    Ok(Some(timestamp.with_timezone(&Utc)))
}

/// Parses the `pages.contributors` JSON array of user ids. A null column is an empty list.
pub fn parse_contributors(value: Option<Json>) -> Result<Vec<i32>, InternalError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    serde_json::from_value(value).map_err(|e| InternalError::MalformedJsonColumn {
        table: "pages",
        column: "contributors",
        source: e,
    })
}

/// Parses the `nav_menus.pages_list` JSON array. A null column is an empty list.
pub fn parse_nav_entries(value: Option<Json>) -> Result<Vec<NavPageRef>, InternalError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    serde_json::from_value(value).map_err(|e| InternalError::MalformedJsonColumn {
        table: "nav_menus",
        column: "pages_list",
        source: e,
    })
}
