use super::*;

/// Tests that hidden players are left out of the public roster.
///
/// Expected: Ok with two players for the admin listing and one for the public listing
#[tokio::test]
async fn public_roster_excludes_hidden_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, _) = factory::helpers::create_team_with_admin(db).await?;
    factory::player::PlayerFactory::new(db, team.id)
        .number(9)
        .build()
        .await?;
    let hidden = factory::player::PlayerFactory::new(db, team.id)
        .number(4)
        .hidden(true)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let all = repo
        .get_by_team_paginated(team.id, true, PageRequest::default())
        .await?;
    let public = repo
        .get_by_team_paginated(team.id, false, PageRequest::default())
        .await?;

    assert_eq!(all.items.len(), 2);
    assert_eq!(all.items[0].number, 4);
    assert_eq!(public.items.len(), 1);
    assert_eq!(public.items[0].number, 9);
    assert!(repo.find_public(hidden.id).await?.is_none());

    Ok(())
}
