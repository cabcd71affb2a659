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
        page::{CreatePageDto, PageDto, UpdatePageDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            page::{CreatePageParams, UpdatePageParams},
            pagination::Pagination,
        },
        service::page::PageService,
        state::AppState,
        validation::validate_id,
    },
};

/// Tag for grouping page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// Create a page.
///
/// The page starts drafted, owned by the caller, with the caller as its only
/// contributor.
///
/// # Access Control
/// - `AdminOrManager` - Only admins and managers can create pages
///
/// # Returns
/// - `200 OK` - The created page
/// - `400 Bad Request` - Invalid fields
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Neither admin nor manager
/// - `409 Conflict` - `urlSlug` already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/create-page",
    tag = PAGE_TAG,
    request_body = CreatePageDto,
    responses(
        (status = 200, description = "Successfully created page", body = ResultDto<PageDto>),
        (status = 400, description = "Invalid fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor manager", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePageParams::from_dto(payload)?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AdminOrManager])
        .await?;

    let page = PageService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(page.into_dto()))))
}

/// List pages.
///
/// Signed in callers get their own drafts, anonymous callers get published pages.
/// Each page comes with its creator.
///
/// # Returns
/// - `200 OK` - List of pages
/// - `400 Bad Request` - Invalid `limit` or `offset`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pages/all",
    tag = PAGE_TAG,
    params(PaginationQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved pages", body = ResultDto<Vec<PageDto>>),
        (status = 400, description = "Invalid pagination", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PaginationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = Pagination::from_query(query)?;

    let viewer = AuthGuard::new(&state.db, &session).viewer().await?;

    let pages = PageService::new(&state.db)
        .get_visible(viewer.map(|u| u.id), pagination)
        .await?;

    let pages: Vec<PageDto> = pages.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(ResultDto::new(pages))))
}

/// Get a page by id.
///
/// Published pages are public; drafts are only visible to their creator and are
/// reported as not found to everyone else.
///
/// # Returns
/// - `200 OK` - The page with its creator
/// - `400 Bad Request` - Invalid page id
/// - `404 Not Found` - No such page, or a draft of another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = i32, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved page", body = ResultDto<PageDto>),
        (status = 400, description = "Invalid page id", body = ValidationErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page_id = validate_id("pageId", &page_id)?;

    let viewer = AuthGuard::new(&state.db, &session).viewer().await?;

    let page = PageService::new(&state.db)
        .get_by_id(page_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(ResultDto::new(page.into_dto()))))
}

/// Update a page's title, content or status.
///
/// Only provided fields are changed. Publishing stamps `publishedTimestamp`,
/// drafting clears it. The caller is added to the contributors.
///
/// # Access Control
/// - `AdminOrManager` - Only admins and managers can update pages
///
/// # Returns
/// - `200 OK` - The updated page
/// - `400 Bad Request` - Invalid page id or fields
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Neither admin nor manager
/// - `404 Not Found` - No such page
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = i32, Path, description = "Page ID")
    ),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Successfully updated page", body = ResultDto<PageDto>),
        (status = 400, description = "Invalid page id or fields", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<String>,
    AppJson(payload): AppJson<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let page_id = validate_id("pageId", &page_id)?;
    let params = UpdatePageParams::from_dto(payload)?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AdminOrManager])
        .await?;

    let page = PageService::new(&state.db)
        .update(page_id, user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(ResultDto::new(page.into_dto()))))
}

/// Delete a page.
///
/// Returns the page as it was before deletion.
///
/// # Access Control
/// - `AdminOrManager` - Only admins and managers can delete pages
///
/// # Returns
/// - `200 OK` - The deleted page
/// - `400 Bad Request` - Invalid page id
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Neither admin nor manager
/// - `404 Not Found` - No such page
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = i32, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted page", body = ResultDto<PageDto>),
        (status = 400, description = "Invalid page id", body = ValidationErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor manager", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page_id = validate_id("pageId", &page_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AdminOrManager])
        .await?;

    let page = PageService::new(&state.db).delete(page_id).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(page.into_dto()))))
}
