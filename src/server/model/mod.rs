//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary. Parameter types carry validated input from controllers into
//! services, together with the [`user::Actor`] performing the operation.

pub mod album;
pub mod arena;
pub mod banner;
pub mod city;
pub mod event;
pub mod info;
pub mod news;
pub mod page;
pub mod photo;
pub mod player;
pub mod team;
pub mod user;

use std::str::FromStr;

use sea_orm::DbErr;

/// Parses an enum stored as text, reporting the column on failure.
pub(crate) fn parse_stored<T: FromStr>(column: &str, value: &str) -> Result<T, DbErr> {
    value
        .parse()
        .map_err(|_| DbErr::Custom(format!("Invalid stored {} '{}'", column, value)))
}

/// A visibility-scoped record together with whether the caller may edit it.
#[derive(Debug, Clone, PartialEq)]
pub struct Editable<T> {
    pub item: T,
    pub can_edit: bool,
}
