use chrono::NaiveDate;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    Goalie,
    Defender,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
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
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SavePlayerDto {
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    pub position: PlayerPosition,
    #[serde(default)]
    pub hand: Hand,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Centimetres, 1..=300.
    #[serde(default)]
    pub height: Option<i32>,
    /// Kilograms, 1..=300.
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl PlayerPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Goalie => "goalie",
            Self::Defender => "defender",
            Self::Forward => "forward",
        }
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "goalie" => Ok(Self::Goalie),
            "defender" => Ok(Self::Defender),
            "forward" => Ok(Self::Forward),
            other => Err(format!("Unknown player position '{}'", other)),
        }
    }
}

impl Hand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Hand {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("Unknown hand '{}'", other)),
        }
    }
}
