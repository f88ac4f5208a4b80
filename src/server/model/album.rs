//! Album domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::album::{AlbumDto, SaveAlbumDto};

/// Name given to the locked album collecting news photos.
pub const NEWS_ALBUM_NAME: &str = "News";

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: i32,
    pub name: String,
    pub locked: bool,
    pub main: bool,
    pub team_id: i32,
    pub photos_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Album {
    pub fn from_entity(entity: entity::album::Model, photos_count: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            locked: entity.locked,
            main: entity.main,
            team_id: entity.team_id,
            photos_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AlbumDto {
        AlbumDto {
            id: self.id,
            name: self.name,
            locked: self.locked,
            main: self.main,
            photos_count: self.photos_count,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveAlbumParams {
    pub name: String,
    pub main: bool,
}

impl SaveAlbumParams {
    pub fn from_dto(dto: SaveAlbumDto) -> Self {
        Self {
            name: dto.name,
            main: dto.main,
        }
    }
}
