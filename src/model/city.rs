use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::access::Visibility;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub visibility: Visibility,
    pub created_by: Option<i32>,
    /// Whether the caller may edit or delete this city.
    pub can_edit: bool,
}

/// Body of city create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveCityDto {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
}
