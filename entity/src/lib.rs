//! SeaORM entity models for the club database.
//!
//! Every table carries `created_at`/`updated_at` timestamps and, except for the session
//! store, a nullable `deleted_at` tombstone. Rows are never physically removed by the
//! application; queries filter on `deleted_at IS NULL` instead.

pub mod prelude;

pub mod album;
pub mod arena;
pub mod banner;
pub mod city;
pub mod event;
pub mod info;
pub mod news;
pub mod photo;
pub mod player;
pub mod team;
pub mod user;
