use chrono::{DateTime, Utc};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Game,
    Training,
    Other,
}

/// How a game tied after regulation was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Overtime {
    Draw,
    Overtime,
    Penalties,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PeriodScoreDto {
    pub home: Option<i32>,
    pub visitor: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreDto {
    #[serde(default)]
    pub first_period: PeriodScoreDto,
    #[serde(default)]
    pub second_period: PeriodScoreDto,
    #[serde(default)]
    pub third_period: PeriodScoreDto,
    #[serde(default, rename = "final")]
    pub final_score: PeriodScoreDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
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
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveEventDto {
    pub kind: EventKind,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub arena_id: Option<i32>,
    #[serde(default)]
    pub city_id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub home_team_id: Option<i32>,
    #[serde(default)]
    pub visitor_team_id: Option<i32>,
    #[serde(default)]
    pub score: ScoreDto,
    #[serde(default)]
    pub overtime: Option<Overtime>,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Training => "training",
            Self::Other => "other",
        }
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "game" => Ok(Self::Game),
            "training" => Ok(Self::Training),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown event kind '{}'", other)),
        }
    }
}

impl Overtime {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Overtime => "overtime",
            Self::Penalties => "penalties",
        }
    }
}

impl FromStr for Overtime {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draw" => Ok(Self::Draw),
            "overtime" => Ok(Self::Overtime),
            "penalties" => Ok(Self::Penalties),
            other => Err(format!("Unknown overtime '{}'", other)),
        }
    }
}
