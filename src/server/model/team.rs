//! Team domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::{
        access::Visibility,
        team::{SaveTeamDto, TeamDto},
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub city_name: Option<String>,
    pub logo: Option<String>,
    pub visibility: Visibility,
    pub created_by: Option<i32>,
}

impl Team {
    pub fn from_entity(
        entity: entity::team::Model,
        city_name: Option<String>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            visibility: parse_stored("visibility", &entity.visibility)?,
            id: entity.id,
            name: entity.name,
            city_id: entity.city_id,
            city_name,
            logo: entity.logo,
            created_by: entity.created_by,
        })
    }

    pub fn into_dto(self, can_edit: bool) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            city_id: self.city_id,
            city_name: self.city_name,
            logo: self.logo,
            visibility: self.visibility,
            can_edit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveTeamParams {
    pub name: String,
    pub city_id: i32,
    pub logo: Option<String>,
    pub visibility: Visibility,
}

impl SaveTeamParams {
    pub fn from_dto(dto: SaveTeamDto) -> Self {
        Self {
            name: dto.name,
            city_id: dto.city_id,
            logo: dto.logo,
            visibility: dto.visibility,
        }
    }
}
