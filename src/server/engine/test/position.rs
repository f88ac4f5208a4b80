use super::*;

/// Tests inserting at position 2 into [0, 1, 2, 3].
///
/// Expected: existing records become [0, 1, 3, 4] and the new record keeps 2
#[tokio::test]
async fn insert_shifts_tail() {
    let store = MemoryStore::with(
        Collection::Info,
        vec![
            positioned(1, 2, None, 0),
            positioned(2, 2, None, 1),
            positioned(3, 2, None, 2),
            positioned(4, 2, None, 3),
            positioned(5, 2, None, 2),
        ],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    engine
        .reindex_on_insert(&Scope::tenant(Collection::Info, 2), 2, Some(5))
        .await;

    assert_eq!(
        store.positions(Collection::Info, &[1, 2, 3, 4, 5]),
        vec![0, 1, 3, 4, 2]
    );
}

/// Tests inserting a banner at position 1 among [1, 2, 3].
///
/// Expected: existing banners become [2, 3, 4] and the new banner keeps 1
#[tokio::test]
async fn banner_insert_at_front() {
    let store = MemoryStore::with(
        Collection::Banner,
        vec![
            positioned(1, 2, None, 1),
            positioned(2, 2, None, 2),
            positioned(3, 2, None, 3),
            positioned(4, 2, None, 1),
        ],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    engine
        .reindex_on_insert(&Scope::tenant(Collection::Banner, 2), 1, Some(4))
        .await;

    assert_eq!(
        store.positions(Collection::Banner, &[1, 2, 3, 4]),
        vec![2, 3, 4, 1]
    );
}

/// Tests that tombstoned and foreign records are not shifted.
///
/// Expected: only live records of the scope move
#[tokio::test]
async fn insert_ignores_tombstoned_and_foreign() {
    let store = MemoryStore::with(
        Collection::Banner,
        vec![
            tombstoned(positioned(1, 2, None, 1)),
            positioned(2, 3, None, 1),
            positioned(3, 2, None, 1),
        ],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    engine
        .reindex_on_insert(&Scope::tenant(Collection::Banner, 2), 1, None)
        .await;

    assert_eq!(
        store.positions(Collection::Banner, &[1, 2, 3]),
        vec![1, 1, 2]
    );
}

/// Tests bulk-appending three photos into an album holding [0, 1].
///
/// Expected: existing photos become [3, 4] and the offsets are {0, 1, 2}
#[tokio::test]
async fn bulk_append_prepends_uploads() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![
            positioned(1, 2, Some(9), 0),
            positioned(2, 2, Some(9), 1),
            positioned(3, 2, Some(8), 0),
        ],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let offsets = engine
        .reindex_bulk_append(&Scope::within(Collection::Photo, 2, 9), 3)
        .await;

    assert_eq!(offsets, vec![0, 1, 2]);
    assert_eq!(store.positions(Collection::Photo, &[1, 2, 3]), vec![3, 4, 0]);
}

/// Tests that an empty upload touches nothing.
///
/// Expected: no offsets, positions unchanged
#[tokio::test]
async fn bulk_append_of_nothing_is_noop() {
    let store = MemoryStore::with(Collection::Photo, vec![positioned(1, 2, Some(9), 0)]);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let offsets = engine
        .reindex_bulk_append(&Scope::within(Collection::Photo, 2, 9), 0)
        .await;

    assert!(offsets.is_empty());
    assert_eq!(store.positions(Collection::Photo, &[1]), vec![0]);
}

/// Tests that a failing shift still yields offsets for the upload.
///
/// Expected: offsets {0, 1}
#[tokio::test]
async fn bulk_append_survives_shift_failure() {
    let store = FailingWrites(MemoryStore::default());
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let offsets = engine
        .reindex_bulk_append(&Scope::within(Collection::Photo, 2, 9), 2)
        .await;

    assert_eq!(offsets, vec![0, 1]);
}

/// Tests applying a valid reorder list.
///
/// Expected: every pair written, count equals the number of pairs
#[tokio::test]
async fn reorder_applies_permutation() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![
            positioned(1, 2, Some(9), 0),
            positioned(2, 2, Some(9), 1),
            positioned(3, 2, Some(9), 2),
        ],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let pairs = [
        PositionPair { id: 1, position: 2 },
        PositionPair { id: 2, position: 0 },
        PositionPair { id: 3, position: 1 },
    ];

    let applied = engine
        .apply_reorder_list(&Scope::within(Collection::Photo, 2, 9), &pairs)
        .await
        .unwrap();

    assert_eq!(applied, 3);
    assert_eq!(store.positions(Collection::Photo, &[1, 2, 3]), vec![2, 0, 1]);
}

/// Tests that strict validation rejects a list before writing anything.
///
/// Expected: Err(ScopeError::Validation), positions unchanged
#[tokio::test]
async fn strict_reorder_rejects_duplicates() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![positioned(1, 2, Some(9), 0), positioned(2, 2, Some(9), 1)],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let pairs = [
        PositionPair { id: 1, position: 1 },
        PositionPair { id: 2, position: 1 },
    ];

    let result = engine
        .apply_reorder_list(&Scope::within(Collection::Photo, 2, 9), &pairs)
        .await;

    assert!(matches!(result, Err(ScopeError::Validation(_))));
    assert_eq!(store.positions(Collection::Photo, &[1, 2]), vec![0, 1]);
}

/// Tests a reorder list spanning from 0 to `i32::MAX`.
///
/// Expected: Err(ScopeError::Validation), positions unchanged
#[tokio::test]
async fn strict_reorder_rejects_extreme_span() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![positioned(1, 2, Some(9), 0), positioned(2, 2, Some(9), 1)],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let pairs = [
        PositionPair { id: 1, position: 0 },
        PositionPair {
            id: 2,
            position: i32::MAX,
        },
    ];

    let result = engine
        .apply_reorder_list(&Scope::within(Collection::Photo, 2, 9), &pairs)
        .await;

    assert!(matches!(result, Err(ScopeError::Validation(_))));
    assert_eq!(store.positions(Collection::Photo, &[1, 2]), vec![0, 1]);
}

/// Tests that the trusting policy writes pairs as given.
///
/// Expected: duplicate positions are written
#[tokio::test]
async fn trusting_reorder_writes_as_given() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![positioned(1, 2, Some(9), 0), positioned(2, 2, Some(9), 1)],
    );
    let engine = ScopeEngine::new(
        &store,
        EnginePolicy {
            reorder: ReorderPolicy::Trusting,
            ..Default::default()
        },
    );
    let pairs = [
        PositionPair { id: 1, position: 5 },
        PositionPair { id: 2, position: 5 },
    ];

    let applied = engine
        .apply_reorder_list(&Scope::within(Collection::Photo, 2, 9), &pairs)
        .await
        .unwrap();

    assert_eq!(applied, 2);
    assert_eq!(store.positions(Collection::Photo, &[1, 2]), vec![5, 5]);
}

/// Tests that ids outside the scope are not counted.
///
/// Expected: only the in-scope record is updated
#[tokio::test]
async fn reorder_skips_foreign_ids() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![positioned(1, 2, Some(9), 0), positioned(2, 2, Some(8), 0)],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let pairs = [
        PositionPair { id: 1, position: 1 },
        PositionPair { id: 2, position: 0 },
    ];

    let applied = engine
        .apply_reorder_list(&Scope::within(Collection::Photo, 2, 9), &pairs)
        .await
        .unwrap();

    assert_eq!(applied, 1);
}

/// Tests moving a photo into another album.
///
/// Expected: destination photos shift by one, moved photo lands at 0, source gap remains
#[tokio::test]
async fn move_lands_at_front_of_destination() {
    let store = MemoryStore::with(
        Collection::Photo,
        vec![
            positioned(1, 2, Some(9), 0),
            positioned(2, 2, Some(9), 1),
            positioned(3, 2, Some(8), 0),
            positioned(4, 2, Some(8), 1),
        ],
    );
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    engine
        .move_across_scope(
            1,
            &Scope::within(Collection::Photo, 2, 9),
            &Scope::within(Collection::Photo, 2, 8),
        )
        .await
        .unwrap();

    let moved = store.get(Collection::Photo, 1);
    assert_eq!(moved.parent_id, Some(8));
    assert_eq!(moved.position, Some(0));
    assert_eq!(store.positions(Collection::Photo, &[2, 3, 4]), vec![1, 1, 2]);
}

/// Tests moving a record that is not in the source scope.
///
/// Expected: Err(ScopeError::NotFound), nothing shifted
#[tokio::test]
async fn move_of_missing_record_is_not_found() {
    let store = MemoryStore::with(Collection::Photo, vec![positioned(3, 2, Some(8), 0)]);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let result = engine
        .move_across_scope(
            1,
            &Scope::within(Collection::Photo, 2, 9),
            &Scope::within(Collection::Photo, 2, 8),
        )
        .await;

    assert!(matches!(result, Err(ScopeError::NotFound(_))));
    assert_eq!(store.positions(Collection::Photo, &[3]), vec![0]);
}

/// Tests that moves across tenants are refused.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn move_across_tenants_is_rejected() {
    let store = MemoryStore::with(Collection::Photo, vec![positioned(1, 2, Some(9), 0)]);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());

    let result = engine
        .move_across_scope(
            1,
            &Scope::within(Collection::Photo, 2, 9),
            &Scope::within(Collection::Photo, 3, 8),
        )
        .await;

    assert!(matches!(result, Err(ScopeError::Validation(_))));
}
