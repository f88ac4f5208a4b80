//! Name and number collision resolution within a visibility or tenant scope.

use serde::Serialize;
use utoipa::ToSchema;

use super::{
    normalize::normalize_name,
    store::{Collection, CollisionKey, RecordFilter, ScopedRecord, ScopedStore},
    ScopeEngine, TombstonePolicy,
};
use crate::{
    model::access::{Role, Visibility},
    server::error::scope::ScopeError,
};

/// Which rule rejected a candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// A `system` record already uses the key.
    System,
    /// A record owned by the caller's tenant already uses the key.
    Personal,
}

impl ConflictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Personal => "personal",
        }
    }
}

/// Caller-side facts a collision check needs.
#[derive(Debug, Clone)]
pub struct ScopeContext {
    pub collection: Collection,
    /// Tenant of the caller.
    pub team_id: i32,
    /// Ids of every user belonging to the caller's tenant.
    pub members: Vec<i32>,
    /// Secondary key that must match as well (the city of a team or arena).
    pub secondary_id: Option<i32>,
    /// Label naming the secondary key in conflict messages (the city name).
    pub context_label: Option<String>,
}

impl ScopeContext {
    pub fn new(collection: Collection, team_id: i32, members: Vec<i32>) -> Self {
        Self {
            collection,
            team_id,
            members,
            secondary_id: None,
            context_label: None,
        }
    }

    pub fn with_secondary(mut self, secondary_id: i32, label: impl Into<String>) -> Self {
        self.secondary_id = Some(secondary_id);
        self.context_label = Some(label.into());
        self
    }
}

/// Outcome of a collision check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<K = String> {
    /// The key as it must be persisted.
    pub normalized: K,
    pub allowed: bool,
    pub conflict_kind: Option<ConflictKind>,
    /// Names the colliding record or the scope it collided in.
    pub conflict_context: Option<String>,
    pub conflict_message: Option<String>,
}

impl<K> Resolution<K> {
    fn allow(normalized: K) -> Self {
        Self {
            normalized,
            allowed: true,
            conflict_kind: None,
            conflict_context: None,
            conflict_message: None,
        }
    }

    fn reject(normalized: K, kind: ConflictKind, context: Option<String>, message: String) -> Self {
        Self {
            normalized,
            allowed: false,
            conflict_kind: Some(kind),
            conflict_context: context,
            conflict_message: Some(message),
        }
    }

    /// Returns the normalized key, or the conflict as a 409 error.
    pub fn ensure_allowed(self) -> Result<K, ScopeError> {
        if self.allowed {
            return Ok(self.normalized);
        }

        Err(ScopeError::Conflict {
            kind: self.conflict_kind.unwrap_or(ConflictKind::Personal),
            message: self
                .conflict_message
                .unwrap_or_else(|| "Record already exists".to_string()),
            context: self.conflict_context,
        })
    }
}

/// Whether `role` may create or edit a record with the requested visibility.
pub fn check_privilege(requested: Visibility, role: Role) -> bool {
    requested != Visibility::System || role == Role::Root
}

/// Same as [`check_privilege`], as a 403 error.
pub fn require_privilege(requested: Visibility, role: Role) -> Result<(), ScopeError> {
    if check_privilege(requested, role) {
        Ok(())
    } else {
        Err(ScopeError::Privilege(
            "Only root users can manage system records".to_string(),
        ))
    }
}

impl<S: ScopedStore> ScopeEngine<'_, S> {
    /// Normalizes `candidate` and checks it against its scope.
    ///
    /// Visibility-scoped collections (city, team, arena) reject a name already used by a
    /// `system` record, then a name already used by a record owned by a tenant member.
    /// Tenant-keyed collections (album, info) reject any name already used in the tenant.
    ///
    /// # Arguments
    /// - `candidate` - Raw name as submitted
    /// - `ctx` - Collection, tenant and secondary key of the caller
    /// - `exclude_id` - Record being edited, ignored during the check
    ///
    /// # Returns
    /// - `Ok(Resolution)` - Allowed or rejected, with the normalized name
    /// - `Err(ScopeError::Validation)` - Name is empty after normalization
    /// - `Err(ScopeError::Store)` - Lookup failed
    pub async fn resolve_name_collision(
        &self,
        candidate: &str,
        ctx: &ScopeContext,
        exclude_id: Option<i32>,
    ) -> Result<Resolution, ScopeError> {
        let visibility_scoped = ctx.collection.is_visibility_scoped();
        let normalized = if visibility_scoped {
            normalize_name(candidate)
        } else {
            candidate.trim().to_string()
        };

        if normalized.is_empty() {
            return Err(ScopeError::Validation(format!(
                "The {} name must not be empty",
                ctx.collection.noun()
            )));
        }

        let mut filter = self
            .base_filter(CollisionKey::Name(normalized.clone()), exclude_id)
            .with_secondary(ctx.secondary_id);
        if !visibility_scoped {
            filter = filter.in_team(ctx.team_id);
        }

        let peers = self.store.find_matching(ctx.collection, &filter).await?;
        let noun = ctx.collection.noun();

        if !visibility_scoped {
            return Ok(match peers.first() {
                Some(_) => Resolution::reject(
                    normalized.clone(),
                    ConflictKind::Personal,
                    None,
                    format!("Your team already has a {} named \"{}\"", noun, normalized),
                ),
                None => Resolution::allow(normalized),
            });
        }

        let within = ctx
            .context_label
            .as_ref()
            .map(|label| format!(" in {}", label))
            .unwrap_or_default();

        if let Some(peer) = peers.iter().find(|p| p.visibility == Visibility::System) {
            let context = ctx.context_label.clone().or_else(|| Some(peer.label.clone()));
            return Ok(Resolution::reject(
                normalized.clone(),
                ConflictKind::System,
                context,
                format!(
                    "A system {} named \"{}\" already exists{}",
                    noun, normalized, within
                ),
            ));
        }

        if let Some(peer) = peers.iter().find(|p| owned_by_members(p, &ctx.members)) {
            let context = ctx.context_label.clone().or_else(|| Some(peer.label.clone()));
            return Ok(Resolution::reject(
                normalized.clone(),
                ConflictKind::Personal,
                context,
                format!(
                    "Your team already has a {} named \"{}\"{}",
                    noun, normalized, within
                ),
            ));
        }

        Ok(Resolution::allow(normalized))
    }

    /// Checks a numeric key (player number) against the caller's tenant.
    ///
    /// The conflict context names the player already wearing the number.
    pub async fn resolve_number_collision(
        &self,
        number: i32,
        ctx: &ScopeContext,
        exclude_id: Option<i32>,
    ) -> Result<Resolution<i32>, ScopeError> {
        let filter = self
            .base_filter(CollisionKey::Number(number), exclude_id)
            .in_team(ctx.team_id);

        let peers = self.store.find_matching(ctx.collection, &filter).await?;

        Ok(match peers.into_iter().next() {
            Some(peer) => Resolution::reject(
                number,
                ConflictKind::Personal,
                Some(peer.label.clone()),
                format!("Number {} is already taken by {}", number, peer.label),
            ),
            None => Resolution::allow(number),
        })
    }

    fn base_filter(&self, key: CollisionKey, exclude_id: Option<i32>) -> RecordFilter {
        RecordFilter::default()
            .keyed(key)
            .excluding(exclude_id)
            .including_tombstoned(self.policy.tombstoned_names == TombstonePolicy::Reserve)
    }
}

fn owned_by_members(record: &ScopedRecord, members: &[i32]) -> bool {
    record.owner.is_some_and(|owner| members.contains(&owner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_visibility_requires_root() {
        assert!(check_privilege(Visibility::System, Role::Root));
        assert!(!check_privilege(Visibility::System, Role::Admin));
        assert!(!check_privilege(Visibility::System, Role::User));
    }

    #[test]
    fn other_visibilities_are_open_to_every_role() {
        for role in [Role::Root, Role::Admin, Role::User] {
            assert!(check_privilege(Visibility::Personal, role));
            assert!(check_privilege(Visibility::Shared, role));
        }
    }

    #[test]
    fn rejected_resolution_becomes_conflict_error() {
        let resolution: Resolution = Resolution::reject(
            "Sofia".to_string(),
            ConflictKind::System,
            Some("Sofia".to_string()),
            "taken".to_string(),
        );

        match resolution.ensure_allowed() {
            Err(ScopeError::Conflict { kind, context, .. }) => {
                assert_eq!(kind, ConflictKind::System);
                assert_eq!(context.as_deref(), Some("Sofia"));
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }
}
