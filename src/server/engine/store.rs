//! Storage port consumed by the engine.
//!
//! The engine only ever needs two capabilities from persistence: finding records that match
//! a filter and applying one patch to every record that matches a filter. Record creation
//! stays in the typed repositories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::access::Visibility;

/// Entity collections managed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    City,
    Team,
    Arena,
    Player,
    Banner,
    Info,
    Album,
    Photo,
    News,
}

impl Collection {
    /// Human readable noun used in conflict messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Team => "team",
            Self::Arena => "arena",
            Self::Player => "player",
            Self::Banner => "banner",
            Self::Info => "info article",
            Self::Album => "album",
            Self::Photo => "photo",
            Self::News => "news article",
        }
    }

    /// Collections whose names are shared across tenants through visibility.
    ///
    /// Their names are title-cased before comparison; every other collection is keyed per
    /// tenant and compared on the trimmed value.
    pub fn is_visibility_scoped(self) -> bool {
        matches!(self, Self::City | Self::Team | Self::Arena)
    }
}

/// A set of records that share ordering or exclusivity.
///
/// Banner, info, album and news scopes are the tenant; photo scopes are the tenant and the
/// album (`parent_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub collection: Collection,
    pub team_id: Option<i32>,
    pub parent_id: Option<i32>,
}

impl Scope {
    pub fn tenant(collection: Collection, team_id: i32) -> Self {
        Self {
            collection,
            team_id: Some(team_id),
            parent_id: None,
        }
    }

    pub fn within(collection: Collection, team_id: i32, parent_id: i32) -> Self {
        Self {
            collection,
            team_id: Some(team_id),
            parent_id: Some(parent_id),
        }
    }

    /// Filter selecting every live record of this scope.
    pub fn filter(&self) -> RecordFilter {
        RecordFilter {
            team_id: self.team_id,
            parent_id: self.parent_id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionKey {
    Name(String),
    Number(i32),
}

/// Conjunction of optional predicates over a collection.
///
/// Tombstoned records are excluded unless `include_tombstoned` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub id: Option<i32>,
    pub exclude_id: Option<i32>,
    pub team_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub key: Option<CollisionKey>,
    pub secondary_id: Option<i32>,
    pub min_position: Option<i32>,
    pub exclusive: Option<bool>,
    pub include_tombstoned: bool,
}

impl RecordFilter {
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn excluding(mut self, id: Option<i32>) -> Self {
        self.exclude_id = id;
        self
    }

    pub fn in_team(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn keyed(mut self, key: CollisionKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_secondary(mut self, secondary_id: Option<i32>) -> Self {
        self.secondary_id = secondary_id;
        self
    }

    pub fn from_position(mut self, position: i32) -> Self {
        self.min_position = Some(position);
        self
    }

    pub fn flagged(mut self, exclusive: bool) -> Self {
        self.exclusive = Some(exclusive);
        self
    }

    pub fn including_tombstoned(mut self, include: bool) -> Self {
        self.include_tombstoned = include;
        self
    }

    /// Evaluates the filter against a record already in memory.
    ///
    /// A predicate on a facet the record does not carry (e.g. `min_position` on a city)
    /// never matches.
    pub fn matches(&self, record: &ScopedRecord) -> bool {
        if !self.include_tombstoned && record.is_tombstoned() {
            return false;
        }
        if self.id.is_some_and(|id| id != record.id) {
            return false;
        }
        if self.exclude_id.is_some_and(|id| id == record.id) {
            return false;
        }
        if self.team_id.is_some() && self.team_id != record.team_id {
            return false;
        }
        if self.parent_id.is_some() && self.parent_id != record.parent_id {
            return false;
        }
        if self.key.is_some() && self.key != record.key {
            return false;
        }
        if self.secondary_id.is_some() && self.secondary_id != record.secondary_id {
            return false;
        }
        if let Some(min) = self.min_position {
            match record.position {
                Some(position) if position >= min => {}
                _ => return false,
            }
        }
        if self.exclusive.is_some() && self.exclusive != record.exclusive {
            return false;
        }
        true
    }
}

/// Mutation applied to every record matched by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPatch {
    ShiftPosition(i32),
    SetPosition(i32),
    ClearExclusive,
    MoveTo { parent_id: i32, position: i32 },
}

impl RecordPatch {
    pub fn apply(&self, record: &mut ScopedRecord) {
        match *self {
            Self::ShiftPosition(delta) => {
                record.position = record.position.map(|position| position + delta);
            }
            Self::SetPosition(position) => record.position = Some(position),
            Self::ClearExclusive => {
                if record.exclusive.is_some() {
                    record.exclusive = Some(false);
                }
            }
            Self::MoveTo {
                parent_id,
                position,
            } => {
                record.parent_id = Some(parent_id);
                record.position = Some(position);
            }
        }
    }
}

/// Engine view of a persisted record.
///
/// Facets a collection does not have are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedRecord {
    pub id: i32,
    pub key: Option<CollisionKey>,
    /// Display label used in conflict messages.
    pub label: String,
    pub visibility: Visibility,
    pub owner: Option<i32>,
    pub team_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub secondary_id: Option<i32>,
    pub position: Option<i32>,
    pub exclusive: Option<bool>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ScopedRecord {
    pub fn is_tombstoned(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Persistence capabilities required by the engine.
#[async_trait]
pub trait ScopedStore: Send + Sync {
    async fn find_matching(
        &self,
        collection: Collection,
        filter: &RecordFilter,
    ) -> Result<Vec<ScopedRecord>, DbErr>;

    /// Applies `patch` to every matching record and returns the number of rows changed.
    async fn bulk_update(
        &self,
        collection: Collection,
        filter: &RecordFilter,
        patch: RecordPatch,
    ) -> Result<u64, DbErr>;
}
