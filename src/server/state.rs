//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::engine::EnginePolicy;

/// Shared state, cloned into every handler by axum's `State` extractor.
///
/// `DatabaseConnection` is a pool handle; clones share the pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Collision and reorder policy passed to every service that runs the scope engine.
    pub policy: EnginePolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }
}
