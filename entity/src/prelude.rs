pub use super::nav_menu::Entity as NavMenu;
pub use super::page::Entity as Page;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
