//! SeaORM implementation of the engine's [`ScopedStore`] port.
//!
//! Each entity maps the engine's abstract facets (key, tenant, parent, position, exclusive
//! flag) onto its own columns through [`ScopedColumns`]. Filters become a single SQL
//! condition and patches a single `UPDATE ... WHERE`, so shifts never load rows.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    model::access::Visibility,
    server::engine::{Collection, CollisionKey, RecordFilter, RecordPatch, ScopedRecord, ScopedStore},
};

/// Engine facets an entity may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopedField {
    Id,
    Name,
    Number,
    Secondary,
    Team,
    Parent,
    Position,
    Exclusive,
    DeletedAt,
}

/// Column mapping from engine facets to an entity.
pub trait ScopedColumns: EntityTrait {
    /// Column backing `field`, or `None` when the entity has no such facet.
    fn column(field: ScopedField) -> Option<Self::Column>;

    fn into_record(model: Self::Model) -> ScopedRecord;
}

pub struct SeaOrmScopedStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaOrmScopedStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScopedStore for SeaOrmScopedStore<'_> {
    async fn find_matching(
        &self,
        collection: Collection,
        filter: &RecordFilter,
    ) -> Result<Vec<ScopedRecord>, DbErr> {
        match collection {
            Collection::City => find::<entity::city::Entity>(self.db, filter).await,
            Collection::Team => find::<entity::team::Entity>(self.db, filter).await,
            Collection::Arena => find::<entity::arena::Entity>(self.db, filter).await,
            Collection::Player => find::<entity::player::Entity>(self.db, filter).await,
            Collection::Banner => find::<entity::banner::Entity>(self.db, filter).await,
            Collection::Info => find::<entity::info::Entity>(self.db, filter).await,
            Collection::Album => find::<entity::album::Entity>(self.db, filter).await,
            Collection::Photo => find::<entity::photo::Entity>(self.db, filter).await,
            Collection::News => find::<entity::news::Entity>(self.db, filter).await,
        }
    }

    async fn bulk_update(
        &self,
        collection: Collection,
        filter: &RecordFilter,
        patch: RecordPatch,
    ) -> Result<u64, DbErr> {
        match collection {
            Collection::City => update::<entity::city::Entity>(self.db, filter, patch).await,
            Collection::Team => update::<entity::team::Entity>(self.db, filter, patch).await,
            Collection::Arena => update::<entity::arena::Entity>(self.db, filter, patch).await,
            Collection::Player => update::<entity::player::Entity>(self.db, filter, patch).await,
            Collection::Banner => update::<entity::banner::Entity>(self.db, filter, patch).await,
            Collection::Info => update::<entity::info::Entity>(self.db, filter, patch).await,
            Collection::Album => update::<entity::album::Entity>(self.db, filter, patch).await,
            Collection::Photo => update::<entity::photo::Entity>(self.db, filter, patch).await,
            Collection::News => update::<entity::news::Entity>(self.db, filter, patch).await,
        }
    }
}

async fn find<E: ScopedColumns>(
    db: &DatabaseConnection,
    filter: &RecordFilter,
) -> Result<Vec<ScopedRecord>, DbErr> {
    let Some(cond) = condition::<E>(filter) else {
        return Ok(Vec::new());
    };

    let models = E::find().filter(cond).all(db).await?;

    Ok(models.into_iter().map(E::into_record).collect())
}

async fn update<E: ScopedColumns>(
    db: &DatabaseConnection,
    filter: &RecordFilter,
    patch: RecordPatch,
) -> Result<u64, DbErr> {
    let Some(cond) = condition::<E>(filter) else {
        return Ok(0);
    };

    let query = E::update_many().filter(cond);
    let query = match patch {
        RecordPatch::ShiftPosition(delta) => {
            let position = require::<E>(ScopedField::Position)?;
            query.col_expr(position, Expr::col(position).add(delta))
        }
        RecordPatch::SetPosition(value) => {
            let position = require::<E>(ScopedField::Position)?;
            query.col_expr(position, Expr::value(value))
        }
        RecordPatch::ClearExclusive => {
            let flag = require::<E>(ScopedField::Exclusive)?;
            query.col_expr(flag, Expr::value(false))
        }
        RecordPatch::MoveTo {
            parent_id,
            position,
        } => query
            .col_expr(require::<E>(ScopedField::Parent)?, Expr::value(parent_id))
            .col_expr(require::<E>(ScopedField::Position)?, Expr::value(position)),
    };

    let result = query.exec(db).await?;

    Ok(result.rows_affected)
}

/// Translates a filter into a SQL condition.
///
/// Returns `None` when the filter constrains a facet the entity does not have, so the
/// filter cannot match any row.
fn condition<E: ScopedColumns>(filter: &RecordFilter) -> Option<Condition> {
    let mut cond = Condition::all();

    if !filter.include_tombstoned {
        cond = cond.add(E::column(ScopedField::DeletedAt)?.is_null());
    }
    if let Some(id) = filter.id {
        cond = cond.add(E::column(ScopedField::Id)?.eq(id));
    }
    if let Some(id) = filter.exclude_id {
        cond = cond.add(E::column(ScopedField::Id)?.ne(id));
    }
    if let Some(team_id) = filter.team_id {
        cond = cond.add(E::column(ScopedField::Team)?.eq(team_id));
    }
    if let Some(parent_id) = filter.parent_id {
        cond = cond.add(E::column(ScopedField::Parent)?.eq(parent_id));
    }
    match &filter.key {
        Some(CollisionKey::Name(name)) => {
            cond = cond.add(E::column(ScopedField::Name)?.eq(name.as_str()));
        }
        Some(CollisionKey::Number(number)) => {
            cond = cond.add(E::column(ScopedField::Number)?.eq(*number));
        }
        None => {}
    }
    if let Some(secondary_id) = filter.secondary_id {
        cond = cond.add(E::column(ScopedField::Secondary)?.eq(secondary_id));
    }
    if let Some(min) = filter.min_position {
        cond = cond.add(E::column(ScopedField::Position)?.gte(min));
    }
    if let Some(flag) = filter.exclusive {
        cond = cond.add(E::column(ScopedField::Exclusive)?.eq(flag));
    }

    Some(cond)
}

fn require<E: ScopedColumns>(field: ScopedField) -> Result<E::Column, DbErr> {
    E::column(field).ok_or_else(|| {
        DbErr::Custom(format!("Column {:?} is not available on this collection", field))
    })
}

/// Record skeleton for tenant content, which is never visibility-scoped.
fn tenant_record(id: i32, label: String, team_id: i32) -> ScopedRecord {
    ScopedRecord {
        id,
        key: None,
        label,
        visibility: Visibility::Personal,
        owner: None,
        team_id: Some(team_id),
        parent_id: None,
        secondary_id: None,
        position: None,
        exclusive: None,
        deleted_at: None,
    }
}

impl ScopedColumns for entity::city::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::city::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Name => Some(Column::Name),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            id: model.id,
            key: Some(CollisionKey::Name(model.name.clone())),
            label: model.name,
            visibility: model.visibility.parse().unwrap_or_default(),
            owner: model.created_by,
            team_id: None,
            parent_id: None,
            secondary_id: None,
            position: None,
            exclusive: None,
            deleted_at: model.deleted_at,
        }
    }
}

impl ScopedColumns for entity::team::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::team::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Name => Some(Column::Name),
            ScopedField::Secondary => Some(Column::CityId),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            id: model.id,
            key: Some(CollisionKey::Name(model.name.clone())),
            label: model.name,
            visibility: model.visibility.parse().unwrap_or_default(),
            owner: model.created_by,
            team_id: None,
            parent_id: None,
            secondary_id: Some(model.city_id),
            position: None,
            exclusive: None,
            deleted_at: model.deleted_at,
        }
    }
}

impl ScopedColumns for entity::arena::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::arena::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Name => Some(Column::Name),
            ScopedField::Secondary => Some(Column::CityId),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            id: model.id,
            key: Some(CollisionKey::Name(model.name.clone())),
            label: model.name,
            visibility: model.visibility.parse().unwrap_or_default(),
            owner: model.created_by,
            team_id: None,
            parent_id: None,
            secondary_id: Some(model.city_id),
            position: None,
            exclusive: None,
            deleted_at: model.deleted_at,
        }
    }
}

impl ScopedColumns for entity::player::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::player::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Number => Some(Column::Number),
            ScopedField::Team => Some(Column::TeamId),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        let label = format!("{} {}", model.first_name, model.last_name);
        ScopedRecord {
            key: Some(CollisionKey::Number(model.number)),
            deleted_at: model.deleted_at,
            ..tenant_record(model.id, label, model.team_id)
        }
    }
}

impl ScopedColumns for entity::banner::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::banner::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Team => Some(Column::TeamId),
            ScopedField::Position => Some(Column::Position),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            position: Some(model.position),
            owner: model.created_by,
            deleted_at: model.deleted_at,
            ..tenant_record(model.id, model.link, model.team_id)
        }
    }
}

impl ScopedColumns for entity::info::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::info::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Name => Some(Column::ShortTitle),
            ScopedField::Team => Some(Column::TeamId),
            ScopedField::Position => Some(Column::Position),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            key: Some(CollisionKey::Name(model.short_title.clone())),
            position: Some(model.position),
            owner: model.created_by,
            deleted_at: model.deleted_at,
            ..tenant_record(model.id, model.short_title, model.team_id)
        }
    }
}

impl ScopedColumns for entity::album::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::album::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Name => Some(Column::Name),
            ScopedField::Team => Some(Column::TeamId),
            ScopedField::Exclusive => Some(Column::Main),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            key: Some(CollisionKey::Name(model.name.clone())),
            exclusive: Some(model.main),
            owner: model.created_by,
            deleted_at: model.deleted_at,
            ..tenant_record(model.id, model.name, model.team_id)
        }
    }
}

impl ScopedColumns for entity::photo::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::photo::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Team => Some(Column::TeamId),
            ScopedField::Parent => Some(Column::AlbumId),
            ScopedField::Position => Some(Column::Position),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        let label = model.name.unwrap_or(model.address);
        ScopedRecord {
            parent_id: Some(model.album_id),
            position: Some(model.position),
            owner: model.created_by,
            deleted_at: model.deleted_at,
            ..tenant_record(model.id, label, model.team_id)
        }
    }
}

impl ScopedColumns for entity::news::Entity {
    fn column(field: ScopedField) -> Option<Self::Column> {
        use entity::news::Column;
        match field {
            ScopedField::Id => Some(Column::Id),
            ScopedField::Team => Some(Column::TeamId),
            ScopedField::Exclusive => Some(Column::Pinned),
            ScopedField::DeletedAt => Some(Column::DeletedAt),
            _ => None,
        }
    }

    fn into_record(model: Self::Model) -> ScopedRecord {
        ScopedRecord {
            exclusive: Some(model.pinned),
            owner: Some(model.created_by),
            deleted_at: model.deleted_at,
            ..tenant_record(model.id, model.title, model.team_id)
        }
    }
}
