use super::*;
use crate::{
    model::access::Visibility,
    server::{data::city::CityRepository, model::city::SaveCityParams},
};

mod get_visible_paginated;
mod soft_delete;
