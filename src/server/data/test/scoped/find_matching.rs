use super::*;

/// Tests that tombstoned rows are hidden unless explicitly requested.
///
/// Expected: Ok with one live album, two when tombstoned rows are included
#[tokio::test]
async fn excludes_tombstoned_unless_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    factory::album::AlbumFactory::new(db, team.id)
        .name("Live")
        .build()
        .await?;
    factory::album::AlbumFactory::new(db, team.id)
        .name("Gone")
        .deleted(true)
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let filter = RecordFilter::default().in_team(team.id);

    let live = store.find_matching(Collection::Album, &filter).await?;
    let all = store
        .find_matching(Collection::Album, &filter.clone().including_tombstoned(true))
        .await?;

    assert_eq!(live.len(), 1);
    assert_eq!(live[0].label, "Live");
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that a predicate on a facet the collection lacks matches nothing.
///
/// Cities have no position column, so a position filter cannot match.
///
/// Expected: Ok with empty result and zero rows updated
#[tokio::test]
async fn missing_facet_never_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::city::create_city(db).await?;

    let store = SeaOrmScopedStore::new(db);
    let filter = RecordFilter::default().from_position(0);

    let found = store.find_matching(Collection::City, &filter).await?;
    let updated = store
        .bulk_update(
            Collection::City,
            &filter,
            crate::server::engine::RecordPatch::ShiftPosition(1),
        )
        .await?;

    assert!(found.is_empty());
    assert_eq!(updated, 0);

    Ok(())
}

/// Tests that team records expose their city as the secondary key.
///
/// Expected: Ok with the record's secondary_id equal to the city id
#[tokio::test]
async fn maps_team_city_as_secondary_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let team = factory::team::TeamFactory::new(db, city.id)
        .name("Levski")
        .visibility("shared")
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let records = store
        .find_matching(Collection::Team, &RecordFilter::default().with_id(team.id))
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].secondary_id, Some(city.id));
    assert_eq!(records[0].visibility, Visibility::Shared);
    assert_eq!(records[0].team_id, None);

    Ok(())
}
