use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request did not come from a signed-in client. Results in 401 Unauthorized.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when a user is deleted while still signed in elsewhere. Results in
    /// 401 Unauthorized so the client signs in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email and password don't match a stored user.
    ///
    /// Results in 401 Unauthorized without revealing whether the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user is authenticated but lacks the required role.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the denied action, for server-side logs
    ///
    /// Results in 403 Forbidden.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes and user-friendly messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
