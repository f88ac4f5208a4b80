use super::*;
use crate::server::data::player::PlayerRepository;

mod get_by_team_paginated;
