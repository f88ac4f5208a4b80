use super::*;

async fn photo_position(db: &sea_orm::DatabaseConnection, id: i32) -> Result<Option<i32>, DbErr> {
    let photo = entity::prelude::Photo::find_by_id(id).one(db).await?;
    Ok(photo.map(|photo| photo.position))
}

/// Tests inserting a banner at position 1 among banners at 1, 2 and 3.
///
/// Expected: Ok with existing banners at 2, 3, 4 and the new banner at 1
#[tokio::test]
async fn insert_shifts_banners_at_and_after_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    let a = factory::banner::create_banner(db, team.id, 1).await?;
    let b = factory::banner::create_banner(db, team.id, 2).await?;
    let c = factory::banner::create_banner(db, team.id, 3).await?;
    let new = factory::banner::create_banner(db, team.id, 1).await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    engine
        .reindex_on_insert(&Scope::tenant(Collection::Banner, team.id), 1, Some(new.id))
        .await;

    let positions = banner_positions(db, team.id).await?;
    assert_eq!(
        positions,
        vec![(a.id, 2), (b.id, 3), (c.id, 4), (new.id, 1)]
    );

    Ok(())
}

/// Tests that a bulk append shifts existing photos of the album only.
///
/// Expected: Ok with offsets 0..3, album photos shifted by 3, other album untouched
#[tokio::test]
async fn bulk_append_shifts_only_target_album() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    let album = factory::album::create_album(db, team.id).await?;
    let other = factory::album::create_album(db, team.id).await?;
    let p0 = factory::photo::create_photo(db, team.id, album.id, 0).await?;
    let p1 = factory::photo::create_photo(db, team.id, album.id, 1).await?;
    let q0 = factory::photo::create_photo(db, team.id, other.id, 0).await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let offsets = engine
        .reindex_bulk_append(&Scope::within(Collection::Photo, team.id, album.id), 3)
        .await;

    assert_eq!(offsets, vec![0, 1, 2]);
    assert_eq!(photo_position(db, p0.id).await?, Some(3));
    assert_eq!(photo_position(db, p1.id).await?, Some(4));
    assert_eq!(photo_position(db, q0.id).await?, Some(0));

    Ok(())
}

/// Tests moving a photo into another album of the same team.
///
/// Expected: Ok with the photo at position 0 of the destination and the destination's
/// photos shifted by one
#[tokio::test]
async fn move_places_photo_first_in_destination() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    let source = factory::album::create_album(db, team.id).await?;
    let target = factory::album::create_album(db, team.id).await?;
    let moving = factory::photo::create_photo(db, team.id, source.id, 4).await?;
    let resident = factory::photo::create_photo(db, team.id, target.id, 0).await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    engine
        .move_across_scope(
            moving.id,
            &Scope::within(Collection::Photo, team.id, source.id),
            &Scope::within(Collection::Photo, team.id, target.id),
        )
        .await
        .unwrap();

    let moving = entity::prelude::Photo::find_by_id(moving.id).one(db).await?.unwrap();
    let resident = entity::prelude::Photo::find_by_id(resident.id).one(db).await?.unwrap();
    assert_eq!(moving.album_id, target.id);
    assert_eq!(moving.position, 0);
    assert_eq!(resident.position, 1);

    Ok(())
}
