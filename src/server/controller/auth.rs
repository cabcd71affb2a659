use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResultDto, ValidationErrorDto},
        user::{SignInDto, SignUpDto, UserDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{SignInParams, SignUpParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the `user` role. While no admin exists, the new account
/// receives the `admin` role instead. Does not sign the user in.
///
/// # Returns
/// - `200 OK` - The created user
/// - `400 Bad Request` - Invalid fields
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/sign-up",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 200, description = "Successfully registered", body = ResultDto<UserDto>),
        (status = 400, description = "Invalid fields", body = ValidationErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignUpParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).sign_up(params).await?;

    Ok((StatusCode::OK, Json(ResultDto::new(user.into_dto()))))
}

/// Sign in with email and password.
///
/// On success the session id is cycled and the user id stored in the session.
///
/// # Returns
/// - `200 OK` - The signed in user
/// - `400 Bad Request` - Missing or malformed fields
/// - `401 Unauthorized` - Email and password don't match
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/sign-in",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Successfully signed in", body = ResultDto<UserDto>),
        (status = 400, description = "Invalid fields", body = ValidationErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignInParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).sign_in(params).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.cycle_id().await?;
    auth_session.set_user_id(user.id).await?;

    tracing::debug!("User {} signed in", user.id);

    Ok((StatusCode::OK, Json(ResultDto::new(user.into_dto()))))
}

/// Sign out, clearing the session.
#[utoipa::path(
    post,
    path = "/sign-out",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully signed out", body = ResultDto<bool>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(ResultDto::new(true))))
}

/// Get the signed in user.
///
/// # Returns
/// - `200 OK` - The signed in user with their role
/// - `401 Unauthorized` - No signed in user
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed in user", body = ResultDto<UserDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .get_by_id(user.id)
        .await?;

    Ok((StatusCode::OK, Json(ResultDto::new(user.into_dto()))))
}
