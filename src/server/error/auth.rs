use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session names a user that does not exist or was tombstoned.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the role required by the route.
    ///
    /// # Fields
    /// - User id
    /// - Server-side description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The route is tenant-scoped and the user belongs to no team.
    #[error("User {0} is not a member of any team")]
    NoTeam(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level; clients get a generic message.
///
/// # Returns
/// - 401 Unauthorized - Missing or unknown session user
/// - 403 Forbidden - Insufficient role or no team
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("You need to log in first")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("You are not allowed to do this")),
            )
                .into_response(),
            Self::NoTeam(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("You are not a member of any team")),
            )
                .into_response(),
        }
    }
}
