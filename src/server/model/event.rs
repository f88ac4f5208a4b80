//! Event domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::event::{EventDto, EventKind, Overtime, PeriodScoreDto, SaveEventDto, ScoreDto},
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub kind: EventKind,
    pub date: DateTime<Utc>,
    pub arena_id: Option<i32>,
    pub city_id: Option<i32>,
    pub description: Option<String>,
    pub home_team_id: Option<i32>,
    pub visitor_team_id: Option<i32>,
    pub score: ScoreDto,
    pub overtime: Option<Overtime>,
    pub team_id: i32,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, DbErr> {
        let overtime = entity
            .overtime
            .as_deref()
            .map(|value| parse_stored("overtime", value))
            .transpose()?;

        Ok(Self {
            kind: parse_stored("kind", &entity.kind)?,
            overtime,
            id: entity.id,
            date: entity.date,
            arena_id: entity.arena_id,
            city_id: entity.city_id,
            description: entity.description,
            home_team_id: entity.home_team_id,
            visitor_team_id: entity.visitor_team_id,
            score: ScoreDto {
                first_period: PeriodScoreDto {
                    home: entity.first_period_home,
                    visitor: entity.first_period_visitor,
                },
                second_period: PeriodScoreDto {
                    home: entity.second_period_home,
                    visitor: entity.second_period_visitor,
                },
                third_period: PeriodScoreDto {
                    home: entity.third_period_home,
                    visitor: entity.third_period_visitor,
                },
                final_score: PeriodScoreDto {
                    home: entity.final_home,
                    visitor: entity.final_visitor,
                },
            },
            team_id: entity.team_id,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            kind: self.kind,
            date: self.date,
            arena_id: self.arena_id,
            city_id: self.city_id,
            description: self.description,
            home_team_id: self.home_team_id,
            visitor_team_id: self.visitor_team_id,
            score: self.score,
            overtime: self.overtime,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveEventParams {
    pub kind: EventKind,
    pub date: DateTime<Utc>,
    pub arena_id: Option<i32>,
    pub city_id: Option<i32>,
    pub description: Option<String>,
    pub home_team_id: Option<i32>,
    pub visitor_team_id: Option<i32>,
    pub score: ScoreDto,
    pub overtime: Option<Overtime>,
}

impl SaveEventParams {
    pub fn from_dto(dto: SaveEventDto) -> Self {
        Self {
            kind: dto.kind,
            date: dto.date,
            arena_id: dto.arena_id,
            city_id: dto.city_id,
            description: dto.description,
            home_team_id: dto.home_team_id,
            visitor_team_id: dto.visitor_team_id,
            score: dto.score,
            overtime: dto.overtime,
        }
    }

    /// Every score cell that was filled in.
    pub fn scores(&self) -> impl Iterator<Item = i32> + '_ {
        [
            self.score.first_period,
            self.score.second_period,
            self.score.third_period,
            self.score.final_score,
        ]
        .into_iter()
        .flat_map(|period| [period.home, period.visitor])
        .flatten()
    }
}
