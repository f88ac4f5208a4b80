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
        photo::{MovePhotoDto, PhotoDto, ReorderPhotosDto, ReorderedDto, UploadPhotosDto},
    },
    server::{
        controller::ListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::photo::{reorder_pairs, PhotoUpload},
        service::photo::PhotoService,
        state::AppState,
    },
};

pub static PHOTO_TAG: &str = "photo";

/// Upload photos into an album.
///
/// The uploads are placed at the front of the album in upload order; existing photos move
/// down by the number of uploads.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Album id
/// - `payload` - Photo addresses with optional names
///
/// # Returns
/// - `201 Created` - Created photos
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Album missing or owned by another team
/// - `422 Unprocessable Entity` - No photos, or an address is not a URL
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/albums/{id}/photos",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Album id")),
    request_body = UploadPhotosDto,
    responses(
        (status = 201, description = "Photos registered", body = Vec<PhotoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 422, description = "No photos or an invalid address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_photos(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<i32>,
    Json(payload): Json<UploadPhotosDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let uploads = payload.photos.into_iter().map(PhotoUpload::from_dto).collect();
    let photos = PhotoService::new(&state.db, state.policy)
        .upload(&actor, album_id, uploads)
        .await?;

    let dtos: Vec<PhotoDto> = photos.into_iter().map(|p| p.into_dto()).collect();
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(dtos))))
}

#[utoipa::path(
    get,
    path = "/api/albums/{id}/photos",
    tag = PHOTO_TAG,
    params(
        ("id" = i32, Path, description = "Album id"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Photos by position", body = PaginatedDto<PhotoDto>),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_photos(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<i32>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(false)
        .await?;

    let page = PhotoService::new(&state.db, state.policy)
        .get_by_album(&actor, album_id, query.into_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto(|p| p.into_dto()))))
}

/// Reorder the photos of an album.
///
/// Each pair sets one photo's position. Under the strict reorder policy the list must not
/// repeat ids or positions and its positions must form a contiguous range.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Album id
/// - `payload` - Photo id and position pairs
///
/// # Returns
/// - `200 OK` - Number of photos updated
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Album missing or owned by another team
/// - `422 Unprocessable Entity` - Invalid reorder list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/albums/{id}/photos/positions",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Album id")),
    request_body = ReorderPhotosDto,
    responses(
        (status = 200, description = "Number of photos repositioned", body = ReorderedDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 422, description = "Invalid position list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_photos(
    State(state): State<AppState>,
    session: Session,
    Path(album_id): Path<i32>,
    Json(payload): Json<ReorderPhotosDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let applied = PhotoService::new(&state.db, state.policy)
        .reorder(&actor, album_id, reorder_pairs(payload.positions))
        .await?;

    Ok(Json(ApiResponse::ok(ReorderedDto { applied })))
}

/// Move a photo into another album of the same team.
///
/// The photo lands at the front of the destination album; the gap in the source is not closed.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Photo id
/// - `payload` - Destination album id
///
/// # Returns
/// - `200 OK` - Moved photo at position 0
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Photo or destination album missing
/// - `422 Unprocessable Entity` - Destination is the photo's current album
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/photos/{id}/album",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo id")),
    request_body = MovePhotoDto,
    responses(
        (status = 200, description = "Photo moved", body = PhotoDto),
        (status = 404, description = "Photo or album not found", body = ErrorDto),
        (status = 422, description = "Photo is already in that album", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_photo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MovePhotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    let photo = PhotoService::new(&state.db, state.policy)
        .move_to_album(&actor, id, payload.album_id)
        .await?;

    Ok(Json(ApiResponse::ok(photo.into_dto())))
}

/// Delete a photo.
///
/// The gap left in the album's positions is not closed.
///
/// # Access Control
/// - `Manage` - Admins and root users of a team
///
/// # Arguments
/// - `state` - Application state containing the database connection and engine policy
/// - `session` - User's session for authentication
/// - `id` - Photo id
///
/// # Returns
/// - `200 OK` - Id of the deleted photo
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Role cannot manage team content, or user has no team
/// - `404 Not Found` - Photo missing or owned by another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Photo deleted", body = IdDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_actor(true)
        .await?;

    PhotoService::new(&state.db, state.policy)
        .delete(&actor, id)
        .await?;

    Ok(Json(ApiResponse::ok(IdDto { id })))
}
