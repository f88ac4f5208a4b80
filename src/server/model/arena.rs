//! Arena domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::{
        access::Visibility,
        arena::{ArenaDto, SaveArenaDto},
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub city_name: Option<String>,
    pub visibility: Visibility,
    pub created_by: Option<i32>,
}

impl Arena {
    pub fn from_entity(
        entity: entity::arena::Model,
        city_name: Option<String>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            visibility: parse_stored("visibility", &entity.visibility)?,
            id: entity.id,
            name: entity.name,
            city_id: entity.city_id,
            city_name,
            created_by: entity.created_by,
        })
    }

    pub fn into_dto(self, can_edit: bool) -> ArenaDto {
        ArenaDto {
            id: self.id,
            name: self.name,
            city_id: self.city_id,
            city_name: self.city_name,
            visibility: self.visibility,
            can_edit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveArenaParams {
    pub name: String,
    pub city_id: i32,
    pub visibility: Visibility,
}

impl SaveArenaParams {
    pub fn from_dto(dto: SaveArenaDto) -> Self {
        Self {
            name: dto.name,
            city_id: dto.city_id,
            visibility: dto.visibility,
        }
    }
}
