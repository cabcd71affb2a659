//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Foreign keys are enforced by the test database, so
//! factories for dependent entities take the ids they reference.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let roles = factory::create_default_roles(&db).await?;
//!     let manager = factory::user::UserFactory::new(&db, roles.manager.id).build().await?;
//!     let page = factory::page::PageFactory::new(&db, manager.id).published().build().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `role` - Create role entities, including the default admin/manager/user set
//! - `user` - Create user entities with a hashed password
//! - `page` - Create page entities
//! - `nav_menu` - Create navigation menu entities
//! - `helpers` - Shared id generation and multi-entity shortcuts

pub mod helpers;
pub mod nav_menu;
pub mod page;
pub mod role;
pub mod user;

pub use helpers::create_user_with_role;
pub use nav_menu::create_nav_menu;
pub use page::create_page;
pub use role::{create_default_roles, create_role, DefaultRoles};
pub use user::create_user;
