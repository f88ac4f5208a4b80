use super::*;

/// Tests that a personal city colliding with a system city is rejected as a system conflict.
///
/// Tenant A's root created the system city "Sofia"; a member of tenant B then submits
/// "sofia" as a personal city.
///
/// Expected: Conflict { kind: System } with the normalized name
#[tokio::test]
async fn system_name_blocks_every_tenant() {
    let store = MemoryStore::with(
        Collection::City,
        vec![named(1, "Sofia", Visibility::System, Some(10))],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::City, 2, vec![20, 21]);

    let resolution = engine.resolve_name_collision("sofia", &ctx, None).await.unwrap();

    assert!(!resolution.allowed);
    assert_eq!(resolution.normalized, "Sofia");
    assert_eq!(resolution.conflict_kind, Some(ConflictKind::System));
}

/// Tests that a name owned by a member of the caller's tenant is a personal conflict.
///
/// Expected: Conflict { kind: Personal }
#[tokio::test]
async fn member_owned_name_is_personal_conflict() {
    let store = MemoryStore::with(
        Collection::City,
        vec![named(1, "Plovdiv", Visibility::Personal, Some(21))],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::City, 2, vec![20, 21]);

    let resolution = engine
        .resolve_name_collision("PLOVDIV", &ctx, None)
        .await
        .unwrap();

    assert_eq!(resolution.conflict_kind, Some(ConflictKind::Personal));
    assert!(resolution.ensure_allowed().is_err());
}

/// Tests that another tenant's personal record does not block the name.
///
/// Expected: allowed
#[tokio::test]
async fn foreign_personal_name_is_allowed() {
    let store = MemoryStore::with(
        Collection::City,
        vec![named(1, "Varna", Visibility::Personal, Some(99))],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::City, 2, vec![20]);

    let resolution = engine.resolve_name_collision("varna", &ctx, None).await.unwrap();

    assert!(resolution.allowed);
    assert_eq!(resolution.ensure_allowed().unwrap(), "Varna");
}

/// Tests that editing a record does not collide with itself.
///
/// Expected: allowed
#[tokio::test]
async fn edited_record_is_excluded() {
    let store = MemoryStore::with(
        Collection::City,
        vec![named(5, "Burgas", Visibility::Personal, Some(20))],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::City, 2, vec![20]);

    let resolution = engine
        .resolve_name_collision("burgas", &ctx, Some(5))
        .await
        .unwrap();

    assert!(resolution.allowed);
}

/// Tests that team names only collide within the same city and the message names the city.
///
/// Expected: conflict in the same city, allowed in another city
#[tokio::test]
async fn team_names_collide_per_city() {
    let mut team = named(1, "Ice Hawks", Visibility::System, None);
    team.secondary_id = Some(7);
    let store = MemoryStore::with(Collection::Team, vec![team]);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let same_city = ScopeContext::new(Collection::Team, 2, vec![20]).with_secondary(7, "Sofia");
    let resolution = engine
        .resolve_name_collision("ice HAWKS", &same_city, None)
        .await
        .unwrap();
    assert_eq!(resolution.conflict_kind, Some(ConflictKind::System));
    assert_eq!(resolution.conflict_context.as_deref(), Some("Sofia"));
    assert!(resolution.conflict_message.unwrap().contains("in Sofia"));

    let other_city = ScopeContext::new(Collection::Team, 2, vec![20]).with_secondary(8, "Varna");
    let resolution = engine
        .resolve_name_collision("ice hawks", &other_city, None)
        .await
        .unwrap();
    assert!(resolution.allowed);
}

/// Tests that tombstoned names stay reserved by default and are released on request.
///
/// Expected: conflict under Reserve, allowed under Release
#[tokio::test]
async fn tombstone_policy_controls_reservation() {
    let store = MemoryStore::with(
        Collection::City,
        vec![tombstoned(named(1, "Ruse", Visibility::System, None))],
    );
    let ctx = ScopeContext::new(Collection::City, 2, vec![20]);

    let reserving = ScopeEngine::new(&store, EnginePolicy::default());
    let resolution = reserving.resolve_name_collision("ruse", &ctx, None).await.unwrap();
    assert!(!resolution.allowed);

    let releasing = ScopeEngine::new(
        &store,
        EnginePolicy {
            tombstoned_names: TombstonePolicy::Release,
            ..Default::default()
        },
    );
    let resolution = releasing.resolve_name_collision("ruse", &ctx, None).await.unwrap();
    assert!(resolution.allowed);
}

/// Tests that album names are keyed per tenant and compared on the trimmed value.
///
/// Expected: conflict in the same team, allowed in another team, no title-casing
#[tokio::test]
async fn album_names_are_tenant_keyed() {
    let mut album = named(1, "summer camp", Visibility::Personal, None);
    album.team_id = Some(2);
    let store = MemoryStore::with(Collection::Album, vec![album]);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let own = ScopeContext::new(Collection::Album, 2, vec![]);
    let resolution = engine
        .resolve_name_collision("  summer camp ", &own, None)
        .await
        .unwrap();
    assert_eq!(resolution.normalized, "summer camp");
    assert_eq!(resolution.conflict_kind, Some(ConflictKind::Personal));

    let other = ScopeContext::new(Collection::Album, 3, vec![]);
    let resolution = engine
        .resolve_name_collision("summer camp", &other, None)
        .await
        .unwrap();
    assert!(resolution.allowed);
}

/// Tests that blank names are rejected before any lookup.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn blank_name_is_validation_error() {
    let store = MemoryStore::default();
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::Arena, 2, vec![]);

    let result = engine.resolve_name_collision("   ", &ctx, None).await;

    assert!(matches!(result, Err(ScopeError::Validation(_))));
}

/// Tests that a taken player number is rejected and names the current holder.
///
/// Expected: Conflict { kind: Personal } with the player label as context
#[tokio::test]
async fn player_number_conflict_names_holder() {
    let mut player = positioned(3, 2, None, 0);
    player.key = Some(CollisionKey::Number(17));
    player.label = "Ivan Petrov".to_string();
    let store = MemoryStore::with(Collection::Player, vec![player]);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::Player, 2, vec![]);

    let resolution = engine.resolve_number_collision(17, &ctx, None).await.unwrap();
    assert_eq!(resolution.conflict_context.as_deref(), Some("Ivan Petrov"));

    let free = engine.resolve_number_collision(18, &ctx, None).await.unwrap();
    assert!(free.allowed);

    let same_player = engine.resolve_number_collision(17, &ctx, Some(3)).await.unwrap();
    assert!(same_player.allowed);
}

/// Tests the privilege gate for system records.
///
/// Expected: Err(ScopeError::Privilege) for admin, Ok for root
#[test]
fn privilege_gate_guards_system_visibility() {
    use crate::server::engine::require_privilege;

    assert!(matches!(
        require_privilege(Visibility::System, Role::Admin),
        Err(ScopeError::Privilege(_))
    ));
    assert!(require_privilege(Visibility::System, Role::Root).is_ok());
    assert!(require_privilege(Visibility::Shared, Role::User).is_ok());
}
