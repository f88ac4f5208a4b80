use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InfoDto {
    pub id: i32,
    pub short_title: String,
    pub long_title: String,
    pub text: String,
    pub position: i32,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveInfoDto {
    pub short_title: String,
    pub long_title: String,
    pub text: String,
    pub position: i32,
}
