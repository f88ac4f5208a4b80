//! Info article domain models and parameters.

use crate::model::info::{InfoDto, SaveInfoDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub id: i32,
    pub short_title: String,
    pub long_title: String,
    pub text: String,
    pub position: i32,
    /// Locked articles cannot be renamed or deleted.
    pub locked: bool,
    pub team_id: i32,
}

impl Info {
    pub fn from_entity(entity: entity::info::Model) -> Self {
        Self {
            id: entity.id,
            short_title: entity.short_title,
            long_title: entity.long_title,
            text: entity.text,
            position: entity.position,
            locked: entity.locked,
            team_id: entity.team_id,
        }
    }

    pub fn into_dto(self) -> InfoDto {
        InfoDto {
            id: self.id,
            short_title: self.short_title,
            long_title: self.long_title,
            text: self.text,
            position: self.position,
            locked: self.locked,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveInfoParams {
    pub short_title: String,
    pub long_title: String,
    pub text: String,
    pub position: i32,
}

impl SaveInfoParams {
    pub fn from_dto(dto: SaveInfoDto) -> Self {
        Self {
            short_title: dto.short_title,
            long_title: dto.long_title,
            text: dto.text,
            position: dto.position,
        }
    }
}
