//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. Every write runs the scope
//! engine before persisting (privilege gate, collision check) and after it (singleton flags,
//! position shifts). Services take the acting user as an [`Actor`] and never see DTOs.

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

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::{
    model::access::Visibility,
    server::{
        data::{city::CityRepository, user::UserRepository},
        engine::{Collection, ScopeContext},
        error::{scope::ScopeError, AppError},
        model::{
            city::{can_edit, is_visible, City},
            user::Actor,
        },
    },
};

/// Builds the collision context of the caller's tenant.
pub(crate) async fn scope_context(
    db: &DatabaseConnection,
    collection: Collection,
    actor: &Actor,
) -> Result<ScopeContext, AppError> {
    let members = UserRepository::new(db).member_ids(actor.team_id).await?;

    Ok(ScopeContext::new(collection, actor.team_id, members))
}

/// Loads a city the tenant may read.
///
/// # Returns
/// - `Ok(City)` - Live city visible to `members`
/// - `Err(ScopeError::NotFound)` - City missing, tombstoned or another tenant's personal city
pub(crate) async fn visible_city(
    db: &DatabaseConnection,
    members: &[i32],
    city_id: i32,
) -> Result<City, AppError> {
    CityRepository::new(db)
        .find_by_id(city_id)
        .await?
        .filter(|city| is_visible(city.visibility, city.created_by, members))
        .ok_or_else(|| ScopeError::NotFound(format!("City {} not found", city_id)).into())
}

/// Rejects edits of a visibility-scoped record the caller does not own.
///
/// # Returns
/// - `Ok(())` - Caller may edit the record
/// - `Err(ScopeError::Privilege)` - System record and caller is not root, or the record is
///   owned by another tenant
pub(crate) fn ensure_editable(
    noun: &str,
    id: i32,
    visibility: Visibility,
    created_by: Option<i32>,
    actor: &Actor,
    members: &[i32],
) -> Result<(), ScopeError> {
    if can_edit(visibility, created_by, actor.role, members) {
        Ok(())
    } else {
        Err(ScopeError::Privilege(format!(
            "You are not allowed to edit {} {}",
            noun, id
        )))
    }
}
