//! Banner domain models and parameters.

use crate::model::banner::{BannerDto, SaveBannerDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: i32,
    pub position: i32,
    pub photo: String,
    pub link: String,
    pub text: Option<String>,
    pub team_id: i32,
}

impl Banner {
    pub fn from_entity(entity: entity::banner::Model) -> Self {
        Self {
            id: entity.id,
            position: entity.position,
            photo: entity.photo,
            link: entity.link,
            text: entity.text,
            team_id: entity.team_id,
        }
    }

    pub fn into_dto(self) -> BannerDto {
        BannerDto {
            id: self.id,
            position: self.position,
            photo: self.photo,
            link: self.link,
            text: self.text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveBannerParams {
    pub position: i32,
    pub photo: String,
    pub link: String,
    pub text: Option<String>,
}

impl SaveBannerParams {
    pub fn from_dto(dto: SaveBannerDto) -> Self {
        Self {
            position: dto.position,
            photo: dto.photo,
            link: dto.link,
            text: dto.text,
        }
    }
}
