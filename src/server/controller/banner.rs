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
        banner::{BannerDto, SaveBannerDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::banner::SaveBannerParams,
        service::banner::BannerService,
        state::AppState,
    },
};

pub static BANNER_TAG: &str = "banner";

/// Create a banner.
///
/// The banner takes its requested position; banners at or after it move down by one.
/// Position shifting never fails the request.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `payload` - Photo and link URLs, position from 1 and optional text
///
/// # Returns
/// - `201 Created` - Banner created
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `422 Unprocessable Entity` - Photo or link not a URL, position below 1, or text shorter than 2 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body = SaveBannerDto,
    responses(
        (status = 201, description = "Banner created", body = BannerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to manage banners", body = ErrorDto),
        (status = 422, description = "Invalid banner data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let banner = BannerService::new(&state.db, state.policy)
        .create(&actor, SaveBannerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(banner.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Banners of the team by position", body = PaginatedDto<BannerDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = BannerService::new(&state.db, state.policy)
        .get_paginated(actor.team_id, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|b| b.into_dto()))))
}

/// Single banner; unauthenticated for the public site.
#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner", body = BannerDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let banner = BannerService::new(&state.db, state.policy)
        .get_by_id(id)
        .await?;

    Ok(Json(ApiResponse::ok(banner.into_dto())))
}

/// Update a banner of the caller's team.
///
/// Moving it to another position shifts the banners at or after that position.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Banner id
/// - `payload` - Replacement banner data
///
/// # Returns
/// - `200 OK` - Updated banner
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Banner missing or owned by another team
/// - `422 Unprocessable Entity` - Photo or link not a URL, position below 1, or text shorter than 2 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner id")),
    request_body = SaveBannerDto,
    responses(
        (status = 200, description = "Banner updated", body = BannerDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 422, description = "Invalid banner data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let banner = BannerService::new(&state.db, state.policy)
        .update(&actor, id, SaveBannerParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(banner.into_dto())))
}

/// Delete a banner of the caller's team.
///
/// The gap left in the positions is not closed.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Banner id
///
/// # Returns
/// - `200 OK` - Id of the deleted banner
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Banner missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Banner deleted", body = IdDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    BannerService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}

#[utoipa::path(
    get,
    path = "/api/public/teams/{team_id}/banners",
    tag = BANNER_TAG,
    params(
        ("team_id" = i32, Path, description = "Team id"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Banners of the team by position", body = PaginatedDto<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_banners(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = BannerService::new(&state.db, state.policy)
        .get_paginated(team_id, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|b| b.into_dto()))))
}
