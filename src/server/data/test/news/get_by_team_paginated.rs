use super::*;

/// Tests that the pinned article leads the listing.
///
/// Expected: Ok with the pinned article first even though it is the oldest
#[tokio::test]
async fn lists_pinned_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let pinned = factory::news::NewsFactory::new(db, team.id, admin.id)
        .pinned(true)
        .build()
        .await?;
    factory::news::create_news(db, team.id, admin.id).await?;
    factory::news::create_news(db, team.id, admin.id).await?;

    let page = NewsRepository::new(db)
        .get_by_team_paginated(team.id, PageRequest::default())
        .await?;

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].id, pinned.id);
    assert!(page.items[1..].iter().all(|n| !n.pinned));

    Ok(())
}
