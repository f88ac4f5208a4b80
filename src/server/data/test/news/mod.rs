use super::*;
use crate::server::{
    data::news::NewsRepository,
    model::news::{NewsPhoto, SaveNewsParams},
};

mod create;
mod get_by_team_paginated;

fn photo(name: &str) -> NewsPhoto {
    NewsPhoto {
        name: name.to_string(),
        address: format!("https://img.club.test/{}", name),
    }
}
