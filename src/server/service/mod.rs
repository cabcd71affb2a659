//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Publication rules, contributor tracking, first-admin assignment
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Converting entity models and returning domain models, never DTOs
//! - **Typed Failures**: Turning missing rows into `AppError::NotFound`

pub mod auth;
pub mod nav;
pub mod page;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;
