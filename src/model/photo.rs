use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub album_id: i32,
    pub name: Option<String>,
    pub address: String,
    pub position: i32,
}

/// A photo already hosted on the image service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotoUploadDto {
    #[serde(default)]
    pub name: Option<String>,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadPhotosDto {
    pub photos: Vec<PhotoUploadDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhotoPositionDto {
    pub id: i32,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderPhotosDto {
    pub positions: Vec<PhotoPositionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderedDto {
    pub applied: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovePhotoDto {
    pub album_id: i32,
}
