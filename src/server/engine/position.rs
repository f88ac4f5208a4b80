//! Dense position maintenance for ordered collections (banner, info, photo).

use std::collections::HashSet;

use serde::Deserialize;
use utoipa::ToSchema;

use super::{
    store::{RecordPatch, Scope, ScopedStore},
    ReorderPolicy, ScopeEngine,
};
use crate::server::error::scope::ScopeError;

/// Requested position for one record of a reorder list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PositionPair {
    pub id: i32,
    pub position: i32,
}

impl<S: ScopedStore> ScopeEngine<'_, S> {
    /// Opens a slot at `new_position` by shifting every live record at or after it by one.
    ///
    /// `exclude_id` is the record that now owns the slot. Failures are logged only.
    pub async fn reindex_on_insert(&self, scope: &Scope, new_position: i32, exclude_id: Option<i32>) {
        let filter = scope.filter().from_position(new_position).excluding(exclude_id);

        if let Err(err) = self
            .store
            .bulk_update(scope.collection, &filter, RecordPatch::ShiftPosition(1))
            .await
        {
            tracing::error!(
                "Failed to shift {} positions from {}: {}",
                scope.collection.noun(),
                new_position,
                err
            );
        }
    }

    /// Shifts every live record of `scope` up by `count` and returns the offsets the new
    /// records take, in upload order.
    ///
    /// The offsets are returned even when the shift failed so the upload still lands; the
    /// failure is logged.
    pub async fn reindex_bulk_append(&self, scope: &Scope, count: usize) -> Vec<i32> {
        if count == 0 {
            return Vec::new();
        }

        let delta = count as i32;
        if let Err(err) = self
            .store
            .bulk_update(scope.collection, &scope.filter(), RecordPatch::ShiftPosition(delta))
            .await
        {
            tracing::error!(
                "Failed to shift {} positions by {}: {}",
                scope.collection.noun(),
                delta,
                err
            );
        }

        (0..delta).collect()
    }

    /// Writes each requested position with a point update restricted to `scope`.
    ///
    /// Under [`ReorderPolicy::Strict`] the whole list is validated before anything is
    /// written. Ids outside the scope are skipped and not counted.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of records updated
    /// - `Err(ScopeError::Validation)` - Strict validation failed
    /// - `Err(ScopeError::Store)` - An update failed; earlier updates remain applied
    pub async fn apply_reorder_list(
        &self,
        scope: &Scope,
        pairs: &[PositionPair],
    ) -> Result<u64, ScopeError> {
        if pairs.is_empty() {
            return Ok(0);
        }

        if self.policy.reorder == ReorderPolicy::Strict {
            validate_reorder(pairs)?;
        }

        let mut applied = 0;
        for pair in pairs {
            applied += self
                .store
                .bulk_update(
                    scope.collection,
                    &scope.filter().with_id(pair.id),
                    RecordPatch::SetPosition(pair.position),
                )
                .await?;
        }

        Ok(applied)
    }

    /// Moves a record into another parent of the same tenant at position 0.
    ///
    /// Every live destination record is shifted up by one first. The gap left in the
    /// source is not closed.
    ///
    /// # Returns
    /// - `Ok(())` - Record moved
    /// - `Err(ScopeError::Validation)` - Destination has no parent or belongs to another tenant
    /// - `Err(ScopeError::NotFound)` - Record is not a live member of `from`
    pub async fn move_across_scope(
        &self,
        record_id: i32,
        from: &Scope,
        to: &Scope,
    ) -> Result<(), ScopeError> {
        let Some(parent_id) = to.parent_id else {
            return Err(ScopeError::Validation(
                "Destination must name a parent".to_string(),
            ));
        };
        if from.team_id != to.team_id || from.collection != to.collection {
            return Err(ScopeError::Validation(
                "Records can only move within the same team".to_string(),
            ));
        }

        let source = from.filter().with_id(record_id);
        if self
            .store
            .find_matching(from.collection, &source)
            .await?
            .is_empty()
        {
            return Err(ScopeError::NotFound(format!(
                "{} {} not found",
                from.collection.noun(),
                record_id
            )));
        }

        let destination = to.filter().excluding(Some(record_id));
        if let Err(err) = self
            .store
            .bulk_update(to.collection, &destination, RecordPatch::ShiftPosition(1))
            .await
        {
            tracing::error!(
                "Failed to shift destination {} positions in parent {}: {}",
                to.collection.noun(),
                parent_id,
                err
            );
        }

        let moved = self
            .store
            .bulk_update(
                from.collection,
                &source,
                RecordPatch::MoveTo {
                    parent_id,
                    position: 0,
                },
            )
            .await?;

        if moved == 0 {
            return Err(ScopeError::NotFound(format!(
                "{} {} not found",
                from.collection.noun(),
                record_id
            )));
        }

        Ok(())
    }
}

fn validate_reorder(pairs: &[PositionPair]) -> Result<(), ScopeError> {
    let mut ids = HashSet::new();
    let mut positions = HashSet::new();

    for pair in pairs {
        if pair.position < 0 {
            return Err(ScopeError::Validation(format!(
                "Position {} must not be negative",
                pair.position
            )));
        }
        if !ids.insert(pair.id) {
            return Err(ScopeError::Validation(format!(
                "Record {} appears more than once",
                pair.id
            )));
        }
        if !positions.insert(pair.position) {
            return Err(ScopeError::Validation(format!(
                "Position {} is requested more than once",
                pair.position
            )));
        }
    }

    let (min, max) = positions
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let span = i64::from(max) - i64::from(min) + 1;
    if span != pairs.len() as i64 {
        return Err(ScopeError::Validation(
            "Positions must form a contiguous range".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(i32, i32)]) -> Vec<PositionPair> {
        raw.iter()
            .map(|&(id, position)| PositionPair { id, position })
            .collect()
    }

    #[test]
    fn accepts_contiguous_permutation() {
        assert!(validate_reorder(&pairs(&[(1, 2), (2, 0), (3, 1)])).is_ok());
        assert!(validate_reorder(&pairs(&[(7, 4), (8, 5)])).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids_and_positions() {
        assert!(validate_reorder(&pairs(&[(1, 0), (1, 1)])).is_err());
        assert!(validate_reorder(&pairs(&[(1, 0), (2, 0)])).is_err());
    }

    #[test]
    fn rejects_negative_and_gapped_positions() {
        assert!(validate_reorder(&pairs(&[(1, -1), (2, 0)])).is_err());
        assert!(validate_reorder(&pairs(&[(1, 0), (2, 2)])).is_err());
    }

    #[test]
    fn rejects_span_reaching_i32_max() {
        assert!(validate_reorder(&pairs(&[(1, 0), (2, i32::MAX)])).is_err());
        assert!(validate_reorder(&pairs(&[(1, i32::MAX - 1), (2, i32::MAX)])).is_ok());
    }
}
