//! Role domain model and the default role set.

use crate::model::user::RoleDto;

/// Full access to every resource.
pub const ROLE_ADMIN: &str = "admin";
/// May manage pages and navigation menus.
pub const ROLE_MANAGER: &str = "manager";
/// Default role for self registered accounts.
pub const ROLE_USER: &str = "user";

/// Roles ensured at startup as `(name, permissions)`.
pub const DEFAULT_ROLES: &[(&str, &str)] = &[
    (ROLE_ADMIN, "*"),
    (ROLE_MANAGER, "pages:write,navs:write"),
    (ROLE_USER, ""),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    /// Permissions split from the stored comma separated string.
    pub permissions: Vec<String>,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        let permissions = entity
            .permissions
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            id: entity.id,
            name: entity.name,
            permissions,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
            permissions: self.permissions,
        }
    }
}
