//! Navigation menu domain models and parameter types.

use serde::{Deserialize, Serialize};

use crate::{
    model::nav::{CreateNavMenuDto, NavMenuDto, NavPageRefDto, NavPageRefInputDto, UpdateNavMenuDto},
    server::{
        error::{internal::InternalError, validation::ValidationError},
        util::parse::parse_nav_entries,
        validation::{Presence, Validator},
    },
};

/// One menu entry as stored in the `pages_list` JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavPageRef {
    pub page_id: i32,
    pub label: String,
}

impl NavPageRef {
    pub fn into_dto(self) -> NavPageRefDto {
        NavPageRefDto {
            page_id: self.page_id,
            label: self.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    pub id: i32,
    pub name: String,
    pub pages_list: Vec<NavPageRef>,
}

impl NavMenu {
    pub fn from_entity(entity: entity::nav_menu::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            pages_list: parse_nav_entries(entity.pages_list)?,
        })
    }

    pub fn into_dto(self) -> NavMenuDto {
        NavMenuDto {
            id: self.id,
            name: self.name,
            pages_list: self
                .pages_list
                .into_iter()
                .map(NavPageRef::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNavMenuParams {
    pub name: String,
    pub pages_list: Vec<NavPageRef>,
}

impl CreateNavMenuParams {
    pub fn from_dto(dto: CreateNavMenuDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let name = validator.name("name", dto.name.as_deref(), Presence::Required);
        let pages_list = validate_entries(&mut validator, dto.pages_list.unwrap_or_default());

        validator.finish()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            pages_list,
        })
    }

    pub fn page_ids(&self) -> Vec<i32> {
        self.pages_list.iter().map(|e| e.page_id).collect()
    }
}

/// Partial menu update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateNavMenuParams {
    pub name: Option<String>,
    pub pages_list: Option<Vec<NavPageRef>>,
}

impl UpdateNavMenuParams {
    pub fn from_dto(dto: UpdateNavMenuDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let name = validator.name("name", dto.name.as_deref(), Presence::Optional);
        let pages_list = dto
            .pages_list
            .map(|entries| validate_entries(&mut validator, entries));

        validator.finish()?;

        Ok(Self { name, pages_list })
    }

    /// Page ids referenced by the new entries, if the update replaces them.
    pub fn page_ids(&self) -> Vec<i32> {
        self.pages_list
            .as_ref()
            .map(|entries| entries.iter().map(|e| e.page_id).collect())
            .unwrap_or_default()
    }
}

/// Validates submitted menu entries, reporting fields as `pages_list[i].pageId`.
fn validate_entries(validator: &mut Validator, entries: Vec<NavPageRefInputDto>) -> Vec<NavPageRef> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let page_id = validator.id_value(&format!("pages_list[{}].pageId", index), entry.page_id);
            let label = validator.name(
                &format!("pages_list[{}].label", index),
                entry.label.as_deref(),
                Presence::Required,
            );

            Some(NavPageRef {
                page_id: page_id?,
                label: label?,
            })
        })
        .collect()
}
