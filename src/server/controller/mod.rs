//! HTTP handlers.
//!
//! Every handler resolves the caller through [`AuthGuard`](super::middleware::auth::AuthGuard),
//! converts request DTOs into parameters, calls one service and wraps the result in
//! [`ApiResponse`](crate::model::api::ApiResponse).

pub mod album;
pub mod arena;
pub mod auth;
pub mod banner;
pub mod city;
pub mod event;
pub mod info;
pub mod news;
pub mod photo;
pub mod player;
pub mod team;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::page::PageRequest;

/// Query parameters shared by every list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// 0-based page index.
    #[serde(default)]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Return every item on a single page.
    #[serde(default)]
    pub no_pagination: bool,
}

fn default_entries() -> u64 {
    10
}

impl ListQuery {
    pub fn into_request(self) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page: self.entries,
            unpaginated: self.no_pagination,
        }
    }
}
