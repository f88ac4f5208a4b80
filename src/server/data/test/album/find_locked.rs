use super::*;

/// Tests finding the locked album of a team.
///
/// Expected: Ok(Some) for the team with a locked album, Ok(None) otherwise
#[tokio::test]
async fn finds_locked_album_of_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    let (bare, _) = factory::helpers::create_team_with_admin(db).await?;
    factory::album::create_album(db, team.id).await?;
    let locked = factory::album::AlbumFactory::new(db, team.id)
        .name("News")
        .locked(true)
        .build()
        .await?;

    let repo = AlbumRepository::new(db);

    let found = repo.find_locked(team.id).await?;
    assert_eq!(found.map(|a| a.id), Some(locked.id));
    assert!(repo.find_locked(bare.id).await?.is_none());

    Ok(())
}
