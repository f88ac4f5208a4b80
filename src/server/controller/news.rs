use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, IdDto, PaginatedDto},
        news::{NewsDto, SaveNewsDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::news::SaveNewsParams,
        service::news::NewsService,
        state::AppState,
    },
};

pub static NEWS_TAG: &str = "news";

/// Create a news article.
///
/// Pinning the article unpins every other article of the team. The cover and gallery
/// photos are copied into the team's locked news album; a failed copy is only logged.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Title, text, cover and at least one gallery photo
///
/// # Returns
/// - `201 Created` - News article created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `422 Unprocessable Entity` - Missing title or text, empty gallery, or photo address not a URL
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = SaveNewsDto,
    responses(
        (status = 201, description = "News published", body = NewsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to manage news", body = ErrorDto),
        (status = 422, description = "Invalid news data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let news = NewsService::new(&state.db, state.policy)
        .create(&actor, SaveNewsParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(news.into_dto()))))
}

/// List the team's news, pinned article first, then newest first.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "News of the team", body = PaginatedDto<NewsDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = NewsService::new(&state.db, state.policy)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|n| n.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News article", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let news = NewsService::new(&state.db, state.policy)
        .get_by_id(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(news.into_dto())))
}

/// Update a news article of the caller's team.
///
/// Only photos the article did not have before are copied into the news album.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - News article id
/// - `payload` - Replacement news article data
///
/// # Returns
/// - `200 OK` - Updated news article
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - News article missing or owned by another team
/// - `422 Unprocessable Entity` - Missing title or text, empty gallery, or photo address not a URL
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    request_body = SaveNewsDto,
    responses(
        (status = 200, description = "News updated", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 422, description = "Invalid news data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let news = NewsService::new(&state.db, state.policy)
        .update(&actor, id, SaveNewsParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(news.into_dto())))
}

/// Pin a news article.
///
/// Every other article of the team is unpinned.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - News article id
///
/// # Returns
/// - `200 OK` - Pinned article
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Article missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/news/{id}/pin",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News pinned", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pin_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let news = NewsService::new(&state.db, state.policy)
        .pin(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(news.into_dto())))
}

/// Delete a news article of the caller's team.
///
/// Deleting the pinned article leaves the team without one.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - News article id
///
/// # Returns
/// - `200 OK` - Id of the deleted news article
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - News article missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News deleted", body = IdDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    NewsService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
