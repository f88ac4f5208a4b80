use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{engine::ConflictKind, error::InternalServerError},
};

/// Errors raised while validating and scoping a write.
///
/// All of them are raised before anything is persisted, except `Store`.
#[derive(Error, Debug)]
pub enum ScopeError {
    /// Malformed or missing input (422).
    #[error("{0}")]
    Validation(String),

    /// Caller's role may not perform the write (403).
    #[error("{0}")]
    Privilege(String),

    /// Key already used within the scope (409).
    #[error("{message}")]
    Conflict {
        kind: ConflictKind,
        message: String,
        /// Names the colliding record or the scope it collided in.
        context: Option<String>,
    },

    /// Record missing, tombstoned or outside the caller's tenant (404).
    #[error("{0}")]
    NotFound(String),

    /// Lookup failed in the underlying store (500).
    #[error(transparent)]
    Store(#[from] sea_orm::DbErr),
}

impl IntoResponse for ScopeError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Privilege(msg) => (StatusCode::FORBIDDEN, Json(ErrorDto::new(msg))).into_response(),
            Self::Conflict {
                kind,
                message,
                context,
            } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    kind: Some(kind.as_str().to_string()),
                    context,
                    ..ErrorDto::new(message)
                }),
            )
                .into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::Store(err) => InternalServerError(err).into_response(),
        }
    }
}
