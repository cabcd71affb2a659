use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResultDto, ValidationErrorDto},
        nav::{CreateNavMenuDto, NavMenuDto, UpdateNavMenuDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::nav::{CreateNavMenuParams, UpdateNavMenuParams},
        service::nav::NavMenuService,
        state::AppState,
        validation::validate_id,
    },
};

/// Tag for grouping navigation menu endpoints in OpenAPI documentation
pub static NAV_TAG: &str = "nav";

/// Create a navigation menu.
///
/// # Access Control
/// - `AdminOrManager` - Only admins and managers can create menus
///
/// # Returns
/// - `200 OK` - The created menu
/// - `400 Bad Request` - Invalid fields or unknown page references
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Neither admin nor manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/create-nav",
    tag = NAV_TAG,
    request_body = CreateNavMenuDto,
    responses(
        (status = 200, description = "Successfully created menu", body = ResultDto<NavMenuDto>),
        (status = 400, description = "Invalid fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_nav_menu(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateNavMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateNavMenuParams::from_dto(payload)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AdminOrManager])
        .await?;

    let menu = NavMenuService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(menu.into_dto()))))
}

/// Get a navigation menu by id. Public.
#[utoipa::path(
    get,
    path = "/navs/{nav_id}",
    tag = NAV_TAG,
    params(
        ("nav_id" = i32, Path, description = "Navigation menu ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved menu", body = ResultDto<NavMenuDto>),
        (status = 400, description = "Invalid menu id", body = ValidationErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nav_menu(
    State(state): State<AppState>,
    Path(nav_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let nav_id = validate_id("navId", &nav_id)?;

    let menu = NavMenuService::new(&state.db).get_by_id(nav_id).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(menu.into_dto()))))
}

/// Update a navigation menu's name or entries.
///
/// Only provided fields are changed; a provided `pages_list` replaces all entries.
///
/// # Access Control
/// - `AdminOrManager` - Only admins and managers can update menus
#[utoipa::path(
    patch,
    path = "/navs/{nav_id}",
    tag = NAV_TAG,
    params(
        ("nav_id" = i32, Path, description = "Navigation menu ID")
    ),
    request_body = UpdateNavMenuDto,
    responses(
        (status = 200, description = "Successfully updated menu", body = ResultDto<NavMenuDto>),
        (status = 400, description = "Invalid fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_nav_menu(
    State(state): State<AppState>,
    session: Session,
    Path(nav_id): Path<String>,
    AppJson(payload): AppJson<UpdateNavMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let nav_id = validate_id("navId", &nav_id)?;
    let params = UpdateNavMenuParams::from_dto(payload)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AdminOrManager])
        .await?;

    let menu = NavMenuService::new(&state.db).update(nav_id, params).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(menu.into_dto()))))
}

/// Delete a navigation menu, returning it as it was before deletion.
///
/// # Access Control
/// - `AdminOrManager` - Only admins and managers can delete menus
#[utoipa::path(
    delete,
    path = "/navs/{nav_id}",
    tag = NAV_TAG,
    params(
        ("nav_id" = i32, Path, description = "Navigation menu ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted menu", body = ResultDto<NavMenuDto>),
        (status = 400, description = "Invalid menu id", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_nav_menu(
    State(state): State<AppState>,
    session: Session,
    Path(nav_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let nav_id = validate_id("navId", &nav_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AdminOrManager])
        .await?;

    let menu = NavMenuService::new(&state.db).delete(nav_id).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(menu.into_dto()))))
}
