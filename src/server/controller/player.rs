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
        player::{PlayerDto, SavePlayerDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::player::SavePlayerParams,
        service::player::PlayerService,
        state::AppState,
    },
};

pub static PLAYER_TAG: &str = "player";

/// Add a player to the caller's roster.
///
/// First and last names are single words of at least two characters and are stored with
/// their first letter upper-cased. The shirt number must be free within the team.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Names, number, position, hand and optional measurements
///
/// # Returns
/// - `201 Created` - Player created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `409 Conflict` - Number already worn by a teammate; `context` names the player
/// - `422 Unprocessable Entity` - Invalid names, number outside 0..=99, measurements outside 1..=300 or photo not a URL
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = SavePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to manage players", body = ErrorDto),
        (status = 409, description = "Number already taken", body = ErrorDto),
        (status = 422, description = "Invalid player data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SavePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let player = PlayerService::new(&state.db, state.policy)
        .create(&actor, SavePlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(player.into_dto()))))
}

/// List the caller's players by number, hidden players included.
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Players of the team", body = PaginatedDto<PlayerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = PlayerService::new(&state.db, state.policy)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|p| p.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let player = PlayerService::new(&state.db, state.policy)
        .get_by_id(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(player.into_dto())))
}

/// Update a player of the caller's team.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Player id
/// - `payload` - Replacement player data
///
/// # Returns
/// - `200 OK` - Updated player
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Player missing or owned by another team
/// - `409 Conflict` - Number already worn by a teammate; `context` names the player
/// - `422 Unprocessable Entity` - Invalid names, number outside 0..=99, measurements outside 1..=300 or photo not a URL
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player id")),
    request_body = SavePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 409, description = "Number already taken", body = ErrorDto),
        (status = 422, description = "Invalid player data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SavePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let player = PlayerService::new(&state.db, state.policy)
        .update(&actor, id, SavePlayerParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(player.into_dto())))
}

/// Remove a player from the caller's roster.
///
/// The player is tombstoned and its number becomes free again.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Player id
///
/// # Returns
/// - `200 OK` - Id of the deleted player
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Player missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player deleted", body = IdDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    PlayerService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}

/// Public roster of a team. Hidden players are left out.
#[utoipa::path(
    get,
    path = "/api/public/teams/{team_id}/players",
    tag = PLAYER_TAG,
    params(
        ("team_id" = i32, Path, description = "Team id"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Visible players of the team", body = PaginatedDto<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_players(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PlayerService::new(&state.db, state.policy)
        .get_public_paginated(team_id, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|p| p.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/public/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player id")),
    responses(
        (status = 200, description = "Player", body = PlayerDto),
        (status = 404, description = "Player not found or hidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db, state.policy)
        .get_public(id)
        .await?;

    Ok(Json(ApiResponse::ok(player.into_dto())))
}
