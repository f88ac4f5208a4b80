use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::access::Visibility;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub city_name: Option<String>,
    pub logo: Option<String>,
    pub visibility: Visibility,
    pub can_edit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveTeamDto {
    pub name: String,
    pub city_id: i32,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
}
