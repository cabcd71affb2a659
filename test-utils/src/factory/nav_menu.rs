//! Navigation menu factory for creating test nav menu entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a navigation menu linking the given pages.
///
/// Each page id becomes an entry labelled `"Link {page_id}"`.
///
/// # Returns
/// - `Ok(entity::nav_menu::Model)` - Created nav menu entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_nav_menu(
    db: &DatabaseConnection,
    page_ids: &[i32],
) -> Result<entity::nav_menu::Model, DbErr> {
    let entries: Vec<serde_json::Value> = page_ids
        .iter()
        .map(|page_id| {
            serde_json::json!({
                "pageId": page_id,
                "label": format!("Link {}", page_id),
            })
        })
        .collect();

    entity::nav_menu::ActiveModel {
        name: ActiveValue::Set(format!("Menu {}", next_id())),
        pages_list: ActiveValue::Set(Some(serde_json::Value::Array(entries))),
        ..Default::default()
    }
    .insert(db)
    .await
}
