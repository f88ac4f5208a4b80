use super::*;
use crate::server::{model::album::SaveAlbumParams, service::album::AlbumService};

/// Tests that creating a main album demotes the previous main album.
///
/// Expected: Ok with only the new album flagged main
#[tokio::test]
async fn new_main_album_demotes_previous() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let old = factory::album::AlbumFactory::new(db, team.id)
        .name("Season 2023")
        .main(true)
        .build()
        .await?;

    let actor = actor(&team, &admin, Role::Admin);
    let service = AlbumService::new(db, EnginePolicy::default());
    let created = service
        .create(
            &actor,
            SaveAlbumParams {
                name: "Season 2024".to_string(),
                main: true,
            },
        )
        .await
        .unwrap();

    assert!(created.main);
    assert!(!service.get_by_id(&actor, old.id).await.unwrap().main);

    Ok(())
}

/// Tests that album names collide within the team.
///
/// Expected: Err(ScopeError::Conflict) of kind personal
#[tokio::test]
async fn rejects_duplicate_album_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    factory::album::AlbumFactory::new(db, team.id)
        .name("Cup final")
        .build()
        .await?;

    let result = AlbumService::new(db, EnginePolicy::default())
        .create(
            &actor(&team, &admin, Role::Admin),
            SaveAlbumParams {
                name: " Cup final ".to_string(),
                main: false,
            },
        )
        .await;

    match result {
        Err(AppError::ScopeErr(ScopeError::Conflict { kind, .. })) => {
            assert_eq!(kind, ConflictKind::Personal)
        }
        other => panic!("expected personal conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that the locked news album cannot be deleted.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn refuses_to_delete_locked_album() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let locked = factory::album::AlbumFactory::new(db, team.id)
        .name("News")
        .locked(true)
        .build()
        .await?;

    let result = AlbumService::new(db, EnginePolicy::default())
        .delete(&actor(&team, &admin, Role::Admin), locked.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}

/// Tests that album names need at least two characters.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn rejects_single_character_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;

    let result = AlbumService::new(db, EnginePolicy::default())
        .create(
            &actor(&team, &admin, Role::Admin),
            SaveAlbumParams {
                name: " X ".to_string(),
                main: false,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}

/// Tests that a user album cannot be renamed to the news album name.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn refuses_rename_to_news() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let album = factory::album::AlbumFactory::new(db, team.id)
        .name("Training")
        .build()
        .await?;

    let result = AlbumService::new(db, EnginePolicy::default())
        .update(
            &actor(&team, &admin, Role::Admin),
            album.id,
            SaveAlbumParams {
                name: "NEWS".to_string(),
                main: false,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}
