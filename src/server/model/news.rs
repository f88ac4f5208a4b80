//! News domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::model::news::{NewsDto, NewsPhotoDto, SaveNewsDto};

/// Gallery photo as stored in the news `photos` JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPhoto {
    pub name: String,
    pub address: String,
}

impl NewsPhoto {
    pub fn from_dto(dto: NewsPhotoDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
        }
    }

    pub fn into_dto(self) -> NewsPhotoDto {
        NewsPhotoDto {
            name: self.name,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub cover: NewsPhoto,
    pub photos: Vec<NewsPhoto>,
    pub pinned: bool,
    pub team_id: i32,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Result<Self, DbErr> {
        let photos: Vec<NewsPhoto> = serde_json::from_value(entity.photos)
            .map_err(|e| DbErr::Custom(format!("Invalid stored news photos: {}", e)))?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            text: entity.text,
            cover: NewsPhoto {
                name: entity.cover_name,
                address: entity.cover_address,
            },
            photos,
            pinned: entity.pinned,
            team_id: entity.team_id,
            created_by: entity.created_by,
            created_at: entity.created_at,
        })
    }

    /// Gallery photos plus the cover.
    pub fn photos_count(&self) -> usize {
        self.photos.len() + 1
    }

    pub fn into_dto(self) -> NewsDto {
        let photos_count = self.photos_count();
        NewsDto {
            id: self.id,
            title: self.title,
            text: self.text,
            cover: self.cover.into_dto(),
            photos: self.photos.into_iter().map(NewsPhoto::into_dto).collect(),
            pinned: self.pinned,
            photos_count,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveNewsParams {
    pub title: String,
    pub text: String,
    pub cover: NewsPhoto,
    pub photos: Vec<NewsPhoto>,
    pub pinned: bool,
}

impl SaveNewsParams {
    pub fn from_dto(dto: SaveNewsDto) -> Self {
        Self {
            title: dto.title,
            text: dto.text,
            cover: NewsPhoto::from_dto(dto.cover),
            photos: dto.photos.into_iter().map(NewsPhoto::from_dto).collect(),
            pinned: dto.pinned,
        }
    }

    /// Cover followed by the gallery, in upload order.
    pub fn all_photos(&self) -> Vec<NewsPhoto> {
        std::iter::once(self.cover.clone())
            .chain(self.photos.iter().cloned())
            .collect()
    }
}
