use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsPhotoDto {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub cover: NewsPhotoDto,
    pub photos: Vec<NewsPhotoDto>,
    pub pinned: bool,
    /// Gallery photos plus the cover.
    pub photos_count: usize,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveNewsDto {
    pub title: String,
    pub text: String,
    pub cover: NewsPhotoDto,
    #[serde(default)]
    pub photos: Vec<NewsPhotoDto>,
    #[serde(default)]
    pub pinned: bool,
}
