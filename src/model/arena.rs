use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::access::Visibility;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArenaDto {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    pub city_name: Option<String>,
    pub visibility: Visibility,
    pub can_edit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveArenaDto {
    pub name: String,
    pub city_id: i32,
    #[serde(default)]
    pub visibility: Visibility,
}
