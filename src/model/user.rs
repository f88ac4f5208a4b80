use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::access::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub team_id: Option<i32>,
}
