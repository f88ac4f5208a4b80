use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BannerDto {
    pub id: i32,
    pub position: i32,
    pub photo: String,
    pub link: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveBannerDto {
    /// 1-based slot; existing banners at or after it move down.
    pub position: i32,
    pub photo: String,
    pub link: String,
    #[serde(default)]
    pub text: Option<String>,
}
