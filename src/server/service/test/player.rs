use super::*;
use crate::{
    model::player::{Hand, PlayerPosition},
    server::{model::player::SavePlayerParams, service::player::PlayerService},
};

fn player(first_name: &str, last_name: &str, number: i32) -> SavePlayerParams {
    SavePlayerParams {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        number,
        position: PlayerPosition::Forward,
        hand: Hand::Left,
        birth_date: None,
        height: Some(182),
        weight: Some(80),
        photo: None,
        description: None,
        hidden: false,
    }
}

/// Tests that a shirt number worn by a teammate is rejected.
///
/// Expected: Err(ScopeError::Conflict) naming the player wearing the number
#[tokio::test]
async fn rejects_taken_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    factory::player::PlayerFactory::new(db, team.id)
        .first_name("Ivan")
        .last_name("Petrov")
        .number(17)
        .build()
        .await?;

    let result = PlayerService::new(db, EnginePolicy::default())
        .create(&actor(&team, &admin, Role::Admin), player("georgi", "ivanov", 17))
        .await;

    match result {
        Err(AppError::ScopeErr(ScopeError::Conflict { kind, context, .. })) => {
            assert_eq!(kind, ConflictKind::Personal);
            assert_eq!(context.as_deref(), Some("Ivan Petrov"));
        }
        other => panic!("expected number conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that the same number is free in another team and for the edited player.
///
/// Expected: Ok for both writes, names formatted
#[tokio::test]
async fn number_is_scoped_to_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let (other_team, _) = factory::helpers::create_team_with_admin(db).await?;
    factory::player::PlayerFactory::new(db, other_team.id)
        .number(9)
        .build()
        .await?;

    let actor = actor(&team, &admin, Role::Admin);
    let service = PlayerService::new(db, EnginePolicy::default());

    let created = service
        .create(&actor, player(" georgi ", "ivanov", 9))
        .await
        .unwrap();
    assert_eq!(created.first_name, "Georgi");
    assert_eq!(created.last_name, "Ivanov");

    let updated = service
        .update(&actor, created.id, player("Georgi", "Ivanov", 9))
        .await
        .unwrap();
    assert_eq!(updated.number, 9);

    Ok(())
}

/// Tests that first and last names are single words of at least two characters.
///
/// Expected: Err(ScopeError::Validation) for each bad name
#[tokio::test]
async fn rejects_malformed_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let actor = actor(&team, &admin, Role::Admin);
    let service = PlayerService::new(db, EnginePolicy::default());

    for params in [
        player("I", "Petrov", 10),
        player("Ivan", "van Petrov", 10),
        player("Ivan Georgi", "Petrov", 10),
    ] {
        let result = service.create(&actor, params).await;
        assert!(matches!(
            result,
            Err(AppError::ScopeErr(ScopeError::Validation(_)))
        ));
    }

    Ok(())
}

/// Tests that hidden players are left out of the public roster only.
///
/// Expected: team roster lists both players, public roster and lookup skip the hidden one
#[tokio::test]
async fn public_roster_skips_hidden_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let visible = factory::player::PlayerFactory::new(db, team.id)
        .number(1)
        .build()
        .await?;
    let hidden = factory::player::PlayerFactory::new(db, team.id)
        .number(2)
        .hidden(true)
        .build()
        .await?;

    let service = PlayerService::new(db, EnginePolicy::default());

    let roster = service
        .get_paginated(&actor(&team, &admin, Role::Admin), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(roster.total, 2);

    let public = service
        .get_public_paginated(team.id, PageRequest::default())
        .await
        .unwrap();
    let ids: Vec<i32> = public.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![visible.id]);

    assert!(service.get_public(visible.id).await.is_ok());
    assert!(matches!(
        service.get_public(hidden.id).await,
        Err(AppError::ScopeErr(ScopeError::NotFound(_)))
    ));

    Ok(())
}
