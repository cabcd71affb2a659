//! Request and response DTOs exchanged over the HTTP API.
//!
//! Everything in here is a plain serde type with an OpenAPI schema. Server-side
//! domain models convert into these at the controller boundary, which is also
//! where sensitive fields (password hash and salt) are left behind.

pub mod api;
pub mod nav;
pub mod page;
pub mod user;
