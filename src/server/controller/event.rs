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
        event::{EventDto, SaveEventDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::event::SaveEventParams,
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

/// Create an event.
///
/// Games need both a home and a visitor team; scores may not be negative.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Kind, date, optional arena, city, teams and scores
///
/// # Returns
/// - `201 Created` - Event created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `422 Unprocessable Entity` - Game without both teams, or negative score
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = SaveEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to manage events", body = ErrorDto),
        (status = 422, description = "Invalid event data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let event = EventService::new(&state.db)
        .create(&actor, SaveEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event.into_dto()))))
}

/// List the team's events, latest first.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Events of the team", body = PaginatedDto<EventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = EventService::new(&state.db)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|e| e.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let event = EventService::new(&state.db).get_by_id(&actor, id).await?;

    Ok(Json(ApiResponse::ok(event.into_dto())))
}

/// Update an event of the caller's team.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Event id
/// - `payload` - Replacement event data
///
/// # Returns
/// - `200 OK` - Updated event
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Event missing or owned by another team
/// - `422 Unprocessable Entity` - Game without both teams, or negative score
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = SaveEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid event data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let event = EventService::new(&state.db)
        .update(&actor, id, SaveEventParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(event.into_dto())))
}

/// Delete an event of the caller's team.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Event id
///
/// # Returns
/// - `200 OK` - Id of the deleted event
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Event missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = IdDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    EventService::new(&state.db).delete(&actor, id).await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
