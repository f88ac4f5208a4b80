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
        arena::{ArenaDto, SaveArenaDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::arena::SaveArenaParams,
        service::arena::ArenaService,
        state::AppState,
    },
};

pub static ARENA_TAG: &str = "arena";

/// Create an arena.
///
/// The name is normalized to title case before the collision check. A personal or shared
/// arena may not reuse the name of a system arena or of one owned by the caller's team.
/// Arena names are compared across every city.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team; `system` visibility requires root
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Arena name, visibility and city
///
/// # Returns
/// - `201 Created` - Arena created with its normalized name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role too low, or `system` requested by a non-root user
/// - `404 Not Found` - City not visible to the caller's team
/// - `409 Conflict` - Name taken; `kind` is `system` or `personal`
/// - `422 Unprocessable Entity` - Name shorter than 2 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/arenas",
    tag = ARENA_TAG,
    request_body = SaveArenaDto,
    responses(
        (status = 201, description = "Arena created", body = ArenaDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to create this arena", body = ErrorDto),
        (status = 404, description = "City not found or not visible", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid arena data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_arena(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveArenaDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let arena = ArenaService::new(&state.db, state.policy)
        .create(&actor, SaveArenaParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(arena.item.into_dto(arena.can_edit))),
    ))
}

/// List visible arenas with their city names and `can_edit`.
#[utoipa::path(
    get,
    path = "/api/arenas",
    tag = ARENA_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Visible arenas", body = PaginatedDto<ArenaDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_arenas(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = ArenaService::new(&state.db, state.policy)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(
        page.into_dto(|arena| arena.item.into_dto(arena.can_edit)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/arenas/{id}",
    tag = ARENA_TAG,
    params(("id" = i32, Path, description = "Arena id")),
    responses(
        (status = 200, description = "Arena", body = ArenaDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Arena not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_arena(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let arena = ArenaService::new(&state.db, state.policy)
        .get_by_id(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(arena.item.into_dto(arena.can_edit))))
}

/// Update an arena.
///
/// Only arenas owned by the caller's team may be edited; root may also edit system arenas.
/// The new name is checked for collisions with the arena itself excluded.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team; `system` visibility requires root
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Arena id
/// - `payload` - Replacement arena data
///
/// # Returns
/// - `200 OK` - Updated arena
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Arena not editable by the caller, or `system` requested by a non-root user
/// - `404 Not Found` - Arena missing or not visible
/// - `409 Conflict` - Name taken; `kind` is `system` or `personal`
/// - `422 Unprocessable Entity` - Invalid arena data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/arenas/{id}",
    tag = ARENA_TAG,
    params(("id" = i32, Path, description = "Arena id")),
    request_body = SaveArenaDto,
    responses(
        (status = 200, description = "Arena updated", body = ArenaDto),
        (status = 403, description = "Not allowed to edit this arena", body = ErrorDto),
        (status = 404, description = "Arena not found or not visible", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid arena data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_arena(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveArenaDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let arena = ArenaService::new(&state.db, state.policy)
        .update(&actor, id, SaveArenaParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(arena.item.into_dto(arena.can_edit))))
}

/// Delete an arena.
///
/// The arena is tombstoned; its name stays reserved unless tombstoned names are released.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Arena id
///
/// # Returns
/// - `200 OK` - Id of the deleted arena
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Arena not editable by the caller
/// - `404 Not Found` - Arena missing or not visible
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/arenas/{id}",
    tag = ARENA_TAG,
    params(("id" = i32, Path, description = "Arena id")),
    responses(
        (status = 200, description = "Arena deleted", body = IdDto),
        (status = 403, description = "Not allowed to delete this arena", body = ErrorDto),
        (status = 404, description = "Arena not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_arena(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    ArenaService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
