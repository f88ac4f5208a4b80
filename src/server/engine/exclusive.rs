use super::{
    store::{RecordPatch, Scope, ScopedStore},
    ScopeEngine,
};

impl<S: ScopedStore> ScopeEngine<'_, S> {
    /// Clears the exclusive flag on every live record of `scope` except `record_id`.
    ///
    /// Called after the caller persisted the flag on `record_id`. Demotion is not atomic with
    /// that write; failures are logged and never surfaced. Calling it again with the same
    /// record is a no-op.
    pub async fn set_exclusive(&self, scope: &Scope, record_id: i32) {
        let filter = scope.filter().excluding(Some(record_id)).flagged(true);

        match self
            .store
            .bulk_update(scope.collection, &filter, RecordPatch::ClearExclusive)
            .await
        {
            Ok(demoted) => tracing::debug!(
                "Demoted {} {} record(s) after flagging {}",
                demoted,
                scope.collection.noun(),
                record_id
            ),
            Err(err) => tracing::error!(
                "Failed to demote {} records after flagging {}: {}",
                scope.collection.noun(),
                record_id,
                err
            ),
        }
    }
}
