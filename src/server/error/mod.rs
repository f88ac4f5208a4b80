//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every controller. It wraps the
//! concern-specific errors (`AuthError`, `ScopeError`, `ConfigError`) and the infrastructure
//! errors raised by SeaORM, SQLx and the session store, and converts all of them into the
//! uniform `{ "success": false, "message": .. }` envelope.

pub mod auth;
pub mod config;
pub mod scope;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, scope::ScopeError},
};

/// Top-level application error type.
///
/// Domain errors handle their own response mapping; infrastructure errors become a generic
/// 500 while the detail is logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error (401/403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Validation, privilege, conflict or not-found error raised around the scope engine.
    #[error(transparent)]
    ScopeErr(#[from] ScopeError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found; results in 404 with the message.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected state; the message is logged and a generic 500 is returned.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 403/404/409/422 - For `ScopeErr`, delegated to `ScopeError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For every infrastructure error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ScopeErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged, generic 500 response.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
