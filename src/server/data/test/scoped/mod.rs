use super::*;
use crate::{
    model::access::Visibility,
    server::{
        data::scoped::SeaOrmScopedStore,
        engine::{
            Collection, ConflictKind, EnginePolicy, RecordFilter, Scope, ScopeContext,
            ScopeEngine, ScopedStore,
        },
    },
};

mod collision;
mod exclusive;
mod find_matching;
mod position;

/// Live positions of a team's banners, ordered by id.
async fn banner_positions(
    db: &sea_orm::DatabaseConnection,
    team_id: i32,
) -> Result<Vec<(i32, i32)>, DbErr> {
    use sea_orm::{ColumnTrait, QueryFilter, QueryOrder};

    Ok(entity::prelude::Banner::find()
        .filter(entity::banner::Column::TeamId.eq(team_id))
        .filter(entity::banner::Column::DeletedAt.is_null())
        .order_by_asc(entity::banner::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.id, b.position))
        .collect())
}
