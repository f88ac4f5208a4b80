use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;

use crate::{
    model::access::{Role, Visibility},
    server::{
        engine::{
            Collection, CollisionKey, ConflictKind, EnginePolicy, PositionPair, RecordFilter,
            RecordPatch, ReorderPolicy, Scope, ScopeContext, ScopeEngine, ScopedRecord,
            ScopedStore, TombstonePolicy,
        },
        error::scope::ScopeError,
    },
};

mod collision;
mod exclusive;
mod position;

/// In-memory `ScopedStore` evaluating filters with `RecordFilter::matches`.
#[derive(Default)]
struct MemoryStore {
    records: Mutex<HashMap<Collection, Vec<ScopedRecord>>>,
}

impl MemoryStore {
    fn with(collection: Collection, records: Vec<ScopedRecord>) -> Self {
        let store = Self::default();
        store.insert(collection, records);
        store
    }

    fn insert(&self, collection: Collection, records: Vec<ScopedRecord>) {
        self.records
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .extend(records);
    }

    fn get(&self, collection: Collection, id: i32) -> ScopedRecord {
        self.records.lock().unwrap()[&collection]
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .unwrap()
    }

    /// Positions of the given records, in the order of `ids`.
    fn positions(&self, collection: Collection, ids: &[i32]) -> Vec<i32> {
        ids.iter()
            .map(|&id| self.get(collection, id).position.unwrap())
            .collect()
    }

    fn flagged(&self, collection: Collection) -> Vec<i32> {
        self.records.lock().unwrap()[&collection]
            .iter()
            .filter(|r| r.exclusive == Some(true) && !r.is_tombstoned())
            .map(|r| r.id)
            .collect()
    }
}

#[async_trait]
impl ScopedStore for MemoryStore {
    async fn find_matching(
        &self,
        collection: Collection,
        filter: &RecordFilter,
    ) -> Result<Vec<ScopedRecord>, DbErr> {
        let records = self.records.lock().unwrap();
        Ok(records
            .get(&collection)
            .map(|all| all.iter().filter(|r| filter.matches(r)).cloned().collect())
            .unwrap_or_default())
    }

    async fn bulk_update(
        &self,
        collection: Collection,
        filter: &RecordFilter,
        patch: RecordPatch,
    ) -> Result<u64, DbErr> {
        let mut records = self.records.lock().unwrap();
        let mut changed = 0;
        for record in records.entry(collection).or_default().iter_mut() {
            if filter.matches(record) {
                patch.apply(record);
                changed += 1;
            }
        }
        Ok(changed)
    }
}

/// Store whose writes always fail, for checking that follow-up maintenance swallows errors.
struct FailingWrites(MemoryStore);

#[async_trait]
impl ScopedStore for FailingWrites {
    async fn find_matching(
        &self,
        collection: Collection,
        filter: &RecordFilter,
    ) -> Result<Vec<ScopedRecord>, DbErr> {
        self.0.find_matching(collection, filter).await
    }

    async fn bulk_update(
        &self,
        _collection: Collection,
        _filter: &RecordFilter,
        _patch: RecordPatch,
    ) -> Result<u64, DbErr> {
        Err(DbErr::Custom("write rejected".to_string()))
    }
}

fn named(id: i32, name: &str, visibility: Visibility, owner: Option<i32>) -> ScopedRecord {
    ScopedRecord {
        id,
        key: Some(CollisionKey::Name(name.to_string())),
        label: name.to_string(),
        visibility,
        owner,
        team_id: None,
        parent_id: None,
        secondary_id: None,
        position: None,
        exclusive: None,
        deleted_at: None,
    }
}

fn positioned(id: i32, team_id: i32, parent_id: Option<i32>, position: i32) -> ScopedRecord {
    ScopedRecord {
        id,
        key: None,
        label: format!("#{}", id),
        visibility: Visibility::Personal,
        owner: None,
        team_id: Some(team_id),
        parent_id,
        secondary_id: None,
        position: Some(position),
        exclusive: None,
        deleted_at: None,
    }
}

fn flaggable(id: i32, team_id: i32, flagged: bool) -> ScopedRecord {
    ScopedRecord {
        id,
        key: None,
        label: format!("#{}", id),
        visibility: Visibility::Personal,
        owner: None,
        team_id: Some(team_id),
        parent_id: None,
        secondary_id: None,
        position: None,
        exclusive: Some(flagged),
        deleted_at: None,
    }
}

fn tombstoned(mut record: ScopedRecord) -> ScopedRecord {
    record.deleted_at = Some(Utc::now());
    record
}
