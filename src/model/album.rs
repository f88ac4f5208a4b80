use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlbumDto {
    pub id: i32,
    pub name: String,
    pub locked: bool,
    pub main: bool,
    pub photos_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveAlbumDto {
    pub name: String,
    #[serde(default)]
    pub main: bool,
}
