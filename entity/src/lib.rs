//! SeaORM entity definitions.
//!
//! Each module declares one table as a plain `Model` struct. Relations between
//! tables are registered explicitly on each entity's `Relation` enum and the
//! matching `Related` impls:
//!
//! - `users.roleId` → `roles.id` (a user belongs to one role)
//! - `pages.creatorId` → `users.id` (a page belongs to its creator)
//!
//! `nav_menus` has no schema-level relations; its page references live inside
//! the `pages_list` JSON column.

pub mod prelude;

pub mod nav_menu;
pub mod page;
pub mod role;
pub mod user;
