use crate::{
    model::access::{Role, Visibility},
    server::{
        engine::{ConflictKind, EnginePolicy},
        error::{scope::ScopeError, AppError},
        model::{page::PageRequest, user::Actor},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod album;
mod arena;
mod city;
mod event;
mod info;
mod player;

/// Acting user for a factory-built member of `team`.
fn actor(team: &entity::team::Model, user: &entity::user::Model, role: Role) -> Actor {
    Actor {
        user_id: user.id,
        team_id: team.id,
        role,
    }
}
