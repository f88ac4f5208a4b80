//! Player domain models and parameters.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::player::{Hand, PlayerDto, PlayerPosition, SavePlayerDto},
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub position: PlayerPosition,
    pub hand: Hand,
    pub birth_date: Option<NaiveDate>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub hidden: bool,
    pub team_id: i32,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        Ok(Self {
            position: parse_stored("position", &entity.position)?,
            hand: parse_stored("hand", &entity.hand)?,
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            number: entity.number,
            birth_date: entity.birth_date,
            height: entity.height,
            weight: entity.weight,
            photo: entity.photo,
            description: entity.description,
            hidden: entity.hidden,
            team_id: entity.team_id,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            number: self.number,
            position: self.position,
            hand: self.hand,
            birth_date: self.birth_date,
            height: self.height,
            weight: self.weight,
            photo: self.photo,
            description: self.description,
            hidden: self.hidden,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SavePlayerParams {
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub position: PlayerPosition,
    pub hand: Hand,
    pub birth_date: Option<NaiveDate>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub hidden: bool,
}

impl SavePlayerParams {
    pub fn from_dto(dto: SavePlayerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            number: dto.number,
            position: dto.position,
            hand: dto.hand,
            birth_date: dto.birth_date,
            height: dto.height,
            weight: dto.weight,
            photo: dto.photo,
            description: dto.description,
            hidden: dto.hidden,
        }
    }
}
