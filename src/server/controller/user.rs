use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationQueryDto, ResultDto, ValidationErrorDto},
        user::{UpdateUserDto, UserDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{pagination::Pagination, user::UpdateUserParams},
        service::user::UserService,
        state::AppState,
        validation::validate_id,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users.
///
/// Returns a window of users ordered by id, each with their role attached.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - List of users
/// - `400 Bad Request` - Invalid `limit` or `offset`
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(PaginationQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved users", body = ResultDto<Vec<UserDto>>),
        (status = 400, description = "Invalid pagination", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PaginationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = Pagination::from_query(query)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_paginated(pagination).await?;

    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(ResultDto::new(users))))
}

/// Get a user by id.
///
/// # Access Control
/// - `SelfOrAdmin` - Users can view themselves, admins can view anyone
///
/// # Returns
/// - `200 OK` - The user with their role
/// - `400 Bad Request` - Invalid user id
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Another user's account and not an admin
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ResultDto<UserDto>),
        (status = 400, description = "Invalid user id", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = validate_id("userId", &user_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(user.into_dto()))))
}

/// Update a user's name or email.
///
/// Only provided fields are changed.
///
/// # Access Control
/// - `SelfOrAdmin` - Users can update themselves, admins can update anyone
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid user id or fields
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Another user's account and not an admin
/// - `404 Not Found` - No such user
/// - `409 Conflict` - Email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = ResultDto<UserDto>),
        (status = 400, description = "Invalid user id or fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    AppJson(payload): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = validate_id("userId", &user_id)?;
    let params = UpdateUserParams::from_dto(payload)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let user = UserService::new(&state.db).update(user_id, params).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(user.into_dto()))))
}

/// Delete a user.
///
/// Returns the user as it was before deletion. Users who still own pages can't
/// be deleted.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `400 Bad Request` - Invalid user id
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No such user
/// - `409 Conflict` - User still owns pages
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = ResultDto<UserDto>),
        (status = 400, description = "Invalid user id", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User still owns pages", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = validate_id("userId", &user_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).delete(user_id).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(user.into_dto()))))
}
