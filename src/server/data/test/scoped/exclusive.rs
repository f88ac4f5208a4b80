use super::*;

/// Tests that flagging a second album as main demotes the first.
///
/// Expected: Ok with only the second album flagged
#[tokio::test]
async fn demotes_previous_main_album() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    let first = factory::album::AlbumFactory::new(db, team.id)
        .main(true)
        .build()
        .await?;
    let second = factory::album::AlbumFactory::new(db, team.id)
        .main(true)
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    engine
        .set_exclusive(&Scope::tenant(Collection::Album, team.id), second.id)
        .await;

    let first = entity::prelude::Album::find_by_id(first.id).one(db).await?.unwrap();
    let second = entity::prelude::Album::find_by_id(second.id).one(db).await?.unwrap();
    assert!(!first.main);
    assert!(second.main);

    Ok(())
}

/// Tests that demotion never crosses into another tenant.
///
/// Expected: Ok with the other team's main album untouched
#[tokio::test]
async fn leaves_other_tenants_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team_a, _) = factory::helpers::create_team_with_admin(db).await?;
    let (team_b, _) = factory::helpers::create_team_with_admin(db).await?;
    let other = factory::album::AlbumFactory::new(db, team_b.id)
        .main(true)
        .build()
        .await?;
    let mine = factory::album::AlbumFactory::new(db, team_a.id)
        .main(true)
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    engine
        .set_exclusive(&Scope::tenant(Collection::Album, team_a.id), mine.id)
        .await;

    let other = entity::prelude::Album::find_by_id(other.id).one(db).await?.unwrap();
    assert!(other.main);

    Ok(())
}
