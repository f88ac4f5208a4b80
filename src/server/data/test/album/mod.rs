use super::*;
use crate::server::data::album::AlbumRepository;

mod find_locked;
mod get_by_team_paginated;
