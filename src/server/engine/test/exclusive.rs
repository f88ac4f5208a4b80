use super::*;

/// Tests that flagging a second record leaves only that record flagged.
///
/// Expected: set_exclusive(X) then set_exclusive(Y) leaves exactly Y flagged
#[tokio::test]
async fn last_flag_wins() {
    let store = MemoryStore::with(
        Collection::Album,
        vec![flaggable(1, 2, true), flaggable(2, 2, false), flaggable(3, 2, false)],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let scope = Scope::tenant(Collection::Album, 2);

    engine.set_exclusive(&scope, 1).await;
    assert_eq!(store.flagged(Collection::Album), vec![1]);

    // The caller persists the flag on record 2 before demoting the rest.
    store.records.lock().unwrap().get_mut(&Collection::Album).unwrap()[1].exclusive = Some(true);
    engine.set_exclusive(&scope, 2).await;

    assert_eq!(store.flagged(Collection::Album), vec![2]);
}

/// Tests that demotion is limited to the tenant of the scope.
///
/// Expected: the other tenant's flagged record is untouched
#[tokio::test]
async fn other_tenants_keep_their_flag() {
    let store = MemoryStore::with(
        Collection::News,
        vec![flaggable(1, 2, true), flaggable(2, 3, true)],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    engine.set_exclusive(&Scope::tenant(Collection::News, 2), 1).await;

    assert_eq!(store.flagged(Collection::News), vec![1, 2]);
}

/// Tests that tombstoning the flagged record leaves the scope without a flagged record.
///
/// Expected: no live flagged record
#[tokio::test]
async fn tombstoned_flag_has_no_successor() {
    let store = MemoryStore::with(
        Collection::Album,
        vec![flaggable(1, 2, true), flaggable(2, 2, false)],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let scope = Scope::tenant(Collection::Album, 2);

    engine.set_exclusive(&scope, 1).await;
    store.records.lock().unwrap().get_mut(&Collection::Album).unwrap()[0].deleted_at =
        Some(Utc::now());
    engine.set_exclusive(&scope, 1).await;

    assert!(store.flagged(Collection::Album).is_empty());
    assert_eq!(store.get(Collection::Album, 2).exclusive, Some(false));
}

/// Tests that a failing store does not surface demotion errors.
///
/// Expected: set_exclusive returns normally
#[tokio::test]
async fn demotion_failure_is_swallowed() {
    let store = FailingWrites(MemoryStore::with(
        Collection::Album,
        vec![flaggable(1, 2, true), flaggable(2, 2, true)],
    ));
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    engine.set_exclusive(&Scope::tenant(Collection::Album, 2), 2).await;

    assert_eq!(store.0.flagged(Collection::Album), vec![1, 2]);
}
