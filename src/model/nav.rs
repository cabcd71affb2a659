use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of a navigation menu, pointing at a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavPageRefDto {
    pub page_id: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavMenuDto {
    pub id: i32,
    pub name: String,
    pub pages_list: Vec<NavPageRefDto>,
}

/// Unvalidated menu entry as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavPageRefInputDto {
    pub page_id: Option<i64>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNavMenuDto {
    pub name: Option<String>,
    pub pages_list: Option<Vec<NavPageRefInputDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNavMenuDto {
    pub name: Option<String>,
    pub pages_list: Option<Vec<NavPageRefInputDto>>,
}
