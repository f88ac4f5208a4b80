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
        city::{CityDto, SaveCityDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::city::SaveCityParams,
        service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Create a city.
///
/// The name is normalized to title case before the collision check. A personal or shared
/// city may not reuse the name of a system city or of one owned by the caller's team.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team; `system` visibility requires root
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - City name, visibility
///
/// # Returns
/// - `201 Created` - City created with its normalized name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role too low, or `system` requested by a non-root user
/// - `409 Conflict` - Name taken; `kind` is `system` or `personal`
/// - `422 Unprocessable Entity` - Empty name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body = SaveCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to create this city", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid city data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let city = CityService::new(&state.db, state.policy)
        .create(&actor, SaveCityParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(city.item.into_dto(city.can_edit))),
    ))
}

/// List the cities visible to the caller's team, ordered by name.
///
/// Visible cities are the system and shared ones plus the personal cities owned by the
/// caller's team.
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Visible cities", body = PaginatedDto<CityDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = CityService::new(&state.db, state.policy)
        .get_paginated(&actor, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(
        page.into_dto(|city| city.item.into_dto(city.can_edit)),
    )))
}

#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "City", body = CityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "City not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let city = CityService::new(&state.db, state.policy)
        .get_by_id(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(city.item.into_dto(city.can_edit))))
}

/// Update a city.
///
/// Only cities owned by the caller's team may be edited; root may also edit system cities.
/// The new name is checked for collisions with the city itself excluded.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team; `system` visibility requires root
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - City id
/// - `payload` - Replacement city data
///
/// # Returns
/// - `200 OK` - Updated city
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - City not editable by the caller, or `system` requested by a non-root user
/// - `404 Not Found` - City missing or not visible
/// - `409 Conflict` - Name taken; `kind` is `system` or `personal`
/// - `422 Unprocessable Entity` - Invalid city data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    request_body = SaveCityDto,
    responses(
        (status = 200, description = "City updated", body = CityDto),
        (status = 403, description = "Not allowed to edit this city", body = ErrorDto),
        (status = 404, description = "City not found or not visible", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid city data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let city = CityService::new(&state.db, state.policy)
        .update(&actor, id, SaveCityParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(city.item.into_dto(city.can_edit))))
}

/// Delete a city.
///
/// The city is tombstoned; its name stays reserved unless tombstoned names are released.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - City id
///
/// # Returns
/// - `200 OK` - Id of the deleted city
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - City not editable by the caller
/// - `404 Not Found` - City missing or not visible
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "City deleted", body = IdDto),
        (status = 403, description = "Not allowed to delete this city", body = ErrorDto),
        (status = 404, description = "City not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    CityService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
