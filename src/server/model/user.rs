//! User domain models.

use sea_orm::DbErr;

use crate::{
    model::{access::Role, user::UserDto},
    server::{error::auth::AuthError, model::parse_stored},
};

/// Authenticated user resolved from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub team_id: Option<i32>,
}

impl CurrentUser {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            role: parse_stored("role", &entity.role)?,
            id: entity.id,
            email: entity.email,
            name: entity.name,
            team_id: entity.team_id,
        })
    }

    /// Narrows the user to the tenant it acts for.
    ///
    /// # Returns
    /// - `Ok(Actor)` - User belongs to a team
    /// - `Err(AuthError::NoTeam)` - User has no team
    pub fn actor(&self) -> Result<Actor, AuthError> {
        let team_id = self.team_id.ok_or(AuthError::NoTeam(self.id))?;

        Ok(Actor {
            user_id: self.id,
            team_id,
            role: self.role,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            team_id: self.team_id,
        }
    }
}

/// The user performing a tenant-scoped operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
    pub team_id: i32,
    pub role: Role,
}
