//! Data transfer objects exchanged with API clients.
//!
//! Every successful response wraps its payload in [`api::ApiResponse`]; every failure is an
//! [`api::ErrorDto`]. Request DTOs are deserialized straight from JSON bodies and converted
//! into server-side parameter types by the controllers.

pub mod access;
pub mod album;
pub mod api;
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
