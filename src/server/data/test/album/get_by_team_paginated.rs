use super::*;

/// Tests that the main album is listed first with live photo counts.
///
/// Expected: Ok with the main album first, counting only live photos
#[tokio::test]
async fn lists_main_album_first_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    let main = factory::album::AlbumFactory::new(db, team.id)
        .name("Main")
        .main(true)
        .build()
        .await?;
    let newer = factory::album::AlbumFactory::new(db, team.id)
        .name("Newer")
        .build()
        .await?;
    factory::photo::create_photo(db, team.id, main.id, 0).await?;
    factory::photo::create_photo(db, team.id, main.id, 1).await?;
    let removed = factory::photo::create_photo(db, team.id, newer.id, 0).await?;
    crate::server::data::photo::PhotoRepository::new(db)
        .soft_delete(team.id, removed.id)
        .await?;

    let page = AlbumRepository::new(db)
        .get_by_team_paginated(team.id, PageRequest::default())
        .await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, main.id);
    assert_eq!(page.items[0].photos_count, 2);
    assert_eq!(page.items[1].id, newer.id);
    assert_eq!(page.items[1].photos_count, 0);

    Ok(())
}

/// Tests that albums of other teams are not listed.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn excludes_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team_a, _) = factory::helpers::create_team_with_admin(db).await?;
    let (team_b, _) = factory::helpers::create_team_with_admin(db).await?;
    factory::album::create_album(db, team_b.id).await?;

    let page = AlbumRepository::new(db)
        .get_by_team_paginated(team_a.id, PageRequest::default())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);

    Ok(())
}
