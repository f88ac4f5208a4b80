use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        album::{AlbumDto, SaveAlbumDto},
        api::{ApiResponse, ErrorDto, IdDto, PaginatedDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::album::SaveAlbumParams,
        service::album::AlbumService,
        state::AppState,
    },
};

pub static ALBUM_TAG: &str = "album";

/// Create an album.
///
/// Album names are unique within the team and the news album name is reserved. Creating
/// the album as main demotes the team's previous main album.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Album name and main flag
///
/// # Returns
/// - `201 Created` - Album created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `409 Conflict` - Name already used by the team
/// - `422 Unprocessable Entity` - Name shorter than 2 characters, reserved, or a locked album renamed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/albums",
    tag = ALBUM_TAG,
    request_body = SaveAlbumDto,
    responses(
        (status = 201, description = "Album created", body = AlbumDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to manage albums", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid album data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_album(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let album = AlbumService::new(&state.db, state.policy)
        .create(&actor, SaveAlbumParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(album.into_dto()))))
}

/// List the team's albums, main album first, then newest first.
#[utoipa::path(
    get,
    path = "/api/albums",
    tag = ALBUM_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Albums with photo counts", body = PaginatedDto<AlbumDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_albums(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = AlbumService::new(&state.db, state.policy)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|a| a.into_dto()))))
}

/// Update an album of the caller's team.
///
/// Locked albums keep their name. Setting the main flag demotes the previous main album.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Album id
/// - `payload` - Replacement album data
///
/// # Returns
/// - `200 OK` - Updated album
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Album missing or owned by another team
/// - `409 Conflict` - Name already used by the team
/// - `422 Unprocessable Entity` - Name shorter than 2 characters, reserved, or a locked album renamed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/albums/{id}",
    tag = ALBUM_TAG,
    params(("id" = i32, Path, description = "Album id")),
    request_body = SaveAlbumDto,
    responses(
        (status = 200, description = "Album updated", body = AlbumDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid data or locked album renamed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_album(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let album = AlbumService::new(&state.db, state.policy)
        .update(&actor, id, SaveAlbumParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(album.into_dto())))
}

/// Make an album the team's main album.
///
/// The previous main album is demoted.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Album id
///
/// # Returns
/// - `200 OK` - Album flagged main
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Album missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/albums/{id}/main",
    tag = ALBUM_TAG,
    params(("id" = i32, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album is now main", body = AlbumDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_main_album(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let album = AlbumService::new(&state.db, state.policy)
        .set_main(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(album.into_dto())))
}

/// Delete an album of the caller's team.
///
/// Locked albums cannot be deleted. Deleting the main album leaves the team without one.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Album id
///
/// # Returns
/// - `200 OK` - Id of the deleted album
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Album missing or owned by another team
/// - `422 Unprocessable Entity` - Album is locked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/albums/{id}",
    tag = ALBUM_TAG,
    params(("id" = i32, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album deleted", body = IdDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 422, description = "Album is locked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_album(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    AlbumService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
