//! HTTP request handlers.
//!
//! Every handler follows the same order: validate the path, query and body into
//! parameter types, check authentication and permissions through `AuthGuard`, call
//! the service, then convert the domain model into a DTO wrapped in `ResultDto`.

pub mod auth;
pub mod nav;
pub mod page;
pub mod user;

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections answer 400 with the validation error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
