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
        info::{InfoDto, SaveInfoDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::info::SaveInfoParams,
        service::info::InfoService,
        state::AppState,
    },
};

pub static INFO_TAG: &str = "info";

/// Create an info article.
///
/// The short title is unique within the team. The article takes its requested position and
/// the articles at or after it move down by one.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Short and long title, text and position
///
/// # Returns
/// - `201 Created` - Info article created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `409 Conflict` - Short title already used by the team
/// - `422 Unprocessable Entity` - Titles or text shorter than 2 characters, or position below 1
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/info",
    tag = INFO_TAG,
    request_body = SaveInfoDto,
    responses(
        (status = 201, description = "Info created", body = InfoDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to manage info articles", body = ErrorDto),
        (status = 409, description = "Short title already taken", body = ErrorDto),
        (status = 422, description = "Invalid info data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_info(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let info = InfoService::new(&state.db, state.policy)
        .create(&actor, SaveInfoParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(info.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/info",
    tag = INFO_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Infos of the team by position", body = PaginatedDto<InfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_info_list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = InfoService::new(&state.db, state.policy)
        .get_paginated(actor.team_id, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|i| i.into_dto()))))
}

/// Single article; unauthenticated for the public site.
#[utoipa::path(
    get,
    path = "/api/info/{id}",
    tag = INFO_TAG,
    params(("id" = i32, Path, description = "Info id")),
    responses(
        (status = 200, description = "Info", body = InfoDto),
        (status = 404, description = "Info not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_info(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let info = InfoService::new(&state.db, state.policy)
        .get_by_id(id)
        .await?;

    Ok(Json(ApiResponse::ok(info.into_dto())))
}

/// Update an info article of the caller's team.
///
/// Locked articles keep their short title.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Info article id
/// - `payload` - Replacement info article data
///
/// # Returns
/// - `200 OK` - Updated info article
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Info article missing or owned by another team
/// - `409 Conflict` - Short title already used by the team
/// - `422 Unprocessable Entity` - Titles or text shorter than 2 characters, or position below 1
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/info/{id}",
    tag = INFO_TAG,
    params(("id" = i32, Path, description = "Info id")),
    request_body = SaveInfoDto,
    responses(
        (status = 200, description = "Info updated", body = InfoDto),
        (status = 404, description = "Info not found", body = ErrorDto),
        (status = 409, description = "Short title already taken", body = ErrorDto),
        (status = 422, description = "Invalid data or locked article renamed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_info(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let info = InfoService::new(&state.db, state.policy)
        .update(&actor, id, SaveInfoParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(info.into_dto())))
}

/// Delete an info article of the caller's team.
///
/// Locked articles cannot be deleted.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Info article id
///
/// # Returns
/// - `200 OK` - Id of the deleted info article
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Info article missing or owned by another team
/// - `422 Unprocessable Entity` - Article is locked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/info/{id}",
    tag = INFO_TAG,
    params(("id" = i32, Path, description = "Info id")),
    responses(
        (status = 200, description = "Info deleted", body = IdDto),
        (status = 404, description = "Info not found", body = ErrorDto),
        (status = 422, description = "Article is locked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_info(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    InfoService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}

#[utoipa::path(
    get,
    path = "/api/public/teams/{team_id}/info",
    tag = INFO_TAG,
    params(
        ("team_id" = i32, Path, description = "Team id"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Infos of the team by position", body = PaginatedDto<InfoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_info(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = InfoService::new(&state.db, state.policy)
        .get_paginated(team_id, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|i| i.into_dto()))))
}
