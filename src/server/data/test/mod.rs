use crate::server::model::page::PageRequest;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod album;
mod city;
mod news;
mod player;
mod scoped;
