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
        team::{TeamDto, SaveTeamDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::SaveTeamParams,
        service::team::TeamService,
        state::AppState,
    },
};

pub static TEAM_TAG: &str = "team";

/// Create a team.
///
/// The name is normalized to title case before the collision check. A personal or shared
/// team may not reuse the name of a system team or of one owned by the caller's team.
/// Team names are only compared within the same city.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team; `system` visibility requires root
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Team name, visibility, city and optional logo
///
/// # Returns
/// - `201 Created` - Team created with its normalized name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role too low, or `system` requested by a non-root user
/// - `404 Not Found` - City not visible to the caller's team
/// - `409 Conflict` - Name taken; `kind` is `system` or `personal`
/// - `422 Unprocessable Entity` - Logo is not a URL, or empty name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = SaveTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to create this team", body = ErrorDto),
        (status = 404, description = "City not found or not visible", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid team data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let team = TeamService::new(&state.db, state.policy)
        .create(&actor, SaveTeamParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(team.item.into_dto(team.can_edit))),
    ))
}

/// List visible teams with their city names and `can_edit`.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Visible teams", body = PaginatedDto<TeamDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = TeamService::new(&state.db, state.policy)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(
        page.into_dto(|team| team.item.into_dto(team.can_edit)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let team = TeamService::new(&state.db, state.policy)
        .get_by_id(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(team.item.into_dto(team.can_edit))))
}

/// Update a team.
///
/// Only teams owned by the caller's team may be edited; root may also edit system teams.
/// The new name is checked for collisions with the team itself excluded.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team; `system` visibility requires root
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Team id
/// - `payload` - Replacement team data
///
/// # Returns
/// - `200 OK` - Updated team
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Team not editable by the caller, or `system` requested by a non-root user
/// - `404 Not Found` - Team missing or not visible
/// - `409 Conflict` - Name taken; `kind` is `system` or `personal`
/// - `422 Unprocessable Entity` - Invalid team data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    request_body = SaveTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 403, description = "Not allowed to edit this team", body = ErrorDto),
        (status = 404, description = "Team not found or not visible", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid team data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let team = TeamService::new(&state.db, state.policy)
        .update(&actor, id, SaveTeamParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(team.item.into_dto(team.can_edit))))
}

/// Delete a team.
///
/// The team is tombstoned; its name stays reserved unless tombstoned names are released.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Team id
///
/// # Returns
/// - `200 OK` - Id of the deleted team
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Team not editable by the caller
/// - `404 Not Found` - Team missing or not visible
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deleted", body = IdDto),
        (status = 403, description = "Not allowed to delete this team", body = ErrorDto),
        (status = 404, description = "Team not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    TeamService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
