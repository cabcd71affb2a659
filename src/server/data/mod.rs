//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Role and user repositories convert entity models into domain
//! models directly since that conversion can't fail. Page and navigation menu repositories
//! return entity models and leave parsing of their text and JSON columns to the services,
//! where a malformed row can be reported as an internal error.

pub mod nav;
pub mod page;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;
