use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user is signed in")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(Uuid),

    /// The signed-in user lacks a required permission.
    ///
    /// The message is only logged; clients receive a generic 403.
    #[error("User {0} denied access: {1}")]
    AccessDenied(Uuid, String),

    /// Unknown user name or wrong password during sign-in.
    #[error("Invalid user name or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized without revealing which part was wrong
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while the client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not signed in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid user name or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
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
