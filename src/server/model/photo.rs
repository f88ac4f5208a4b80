//! Photo domain models and parameters.

use crate::{
    model::photo::{PhotoDto, PhotoPositionDto, PhotoUploadDto},
    server::engine::PositionPair,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub album_id: i32,
    pub name: Option<String>,
    pub address: String,
    pub position: i32,
    pub team_id: i32,
}

impl Photo {
    pub fn from_entity(entity: entity::photo::Model) -> Self {
        Self {
            id: entity.id,
            album_id: entity.album_id,
            name: entity.name,
            address: entity.address,
            position: entity.position,
            team_id: entity.team_id,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            album_id: self.album_id,
            name: self.name,
            address: self.address,
            position: self.position,
        }
    }
}

/// A hosted photo to register in an album.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub name: Option<String>,
    pub address: String,
}

impl PhotoUpload {
    pub fn from_dto(dto: PhotoUploadDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
        }
    }
}

/// Row values for one photo insert.
#[derive(Debug, Clone)]
pub struct CreatePhotoParams {
    pub album_id: i32,
    pub team_id: i32,
    pub created_by: Option<i32>,
    pub name: Option<String>,
    pub address: String,
    pub position: i32,
}

pub fn reorder_pairs(dtos: Vec<PhotoPositionDto>) -> Vec<PositionPair> {
    dtos.into_iter()
        .map(|dto| PositionPair {
            id: dto.id,
            position: dto.position,
        })
        .collect()
}
