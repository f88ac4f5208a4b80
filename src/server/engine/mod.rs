//! Scoped-collision and ordering engine.
//!
//! Shared by every entity service to keep tenant-scoped invariants intact across writes:
//!
//! - **Collision resolution** (`collision`) normalizes a candidate name or number and decides
//!   whether it may be persisted given the visibility scope and the caller's tenant.
//! - **Singleton flags** (`exclusive`) demote every other record in a scope after one record
//!   was flagged (album `main`, news `pinned`).
//! - **Dense positions** (`position`) shift and rewrite ordering keys on insert, bulk append,
//!   explicit reorder and moves between parents.
//!
//! The engine holds no state of its own. Every operation re-reads persisted data through the
//! injected [`ScopedStore`], so the same code runs against SeaORM in production and against
//! an in-memory store in tests. Follow-up maintenance (flag demotion, position shifts) runs
//! after the primary write and is never atomic with it; those failures are logged and
//! swallowed.

pub mod collision;
pub mod exclusive;
pub mod normalize;
pub mod position;
pub mod store;

#[cfg(test)]
mod test;

use std::str::FromStr;

pub use collision::{check_privilege, require_privilege, ConflictKind, Resolution, ScopeContext};
pub use position::PositionPair;
pub use store::{
    Collection, CollisionKey, RecordFilter, RecordPatch, Scope, ScopedRecord, ScopedStore,
};

/// Whether tombstoned records keep their names reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TombstonePolicy {
    /// Tombstoned peers still block their name or number.
    #[default]
    Reserve,
    /// Only live records take part in collision checks.
    Release,
}

impl FromStr for TombstonePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reserve" => Ok(Self::Reserve),
            "release" => Ok(Self::Release),
            other => Err(other.to_string()),
        }
    }
}

/// How explicit reorder requests are validated before they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderPolicy {
    /// Ids and positions must be distinct, non-negative and contiguous.
    #[default]
    Strict,
    /// Pairs are written as given.
    Trusting,
}

impl FromStr for ReorderPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "trusting" => Ok(Self::Trusting),
            other => Err(other.to_string()),
        }
    }
}

/// Runtime policy knobs for the engine, loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnginePolicy {
    pub tombstoned_names: TombstonePolicy,
    pub reorder: ReorderPolicy,
}

/// Entry point for all engine operations.
///
/// Borrowed per request, the same way repositories borrow the database connection.
pub struct ScopeEngine<'a, S: ScopedStore> {
    store: &'a S,
    policy: EnginePolicy,
}

impl<'a, S: ScopedStore> ScopeEngine<'a, S> {
    pub fn new(store: &'a S, policy: EnginePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> EnginePolicy {
        self.policy
    }
}
