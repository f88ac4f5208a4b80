use chrono::Utc;

use super::*;
use crate::{
    model::event::{EventKind, PeriodScoreDto, ScoreDto},
    server::{model::event::SaveEventParams, service::event::EventService},
};

fn game(home_team_id: Option<i32>, visitor_team_id: Option<i32>) -> SaveEventParams {
    SaveEventParams {
        kind: EventKind::Game,
        date: Utc::now(),
        arena_id: None,
        city_id: None,
        description: None,
        home_team_id,
        visitor_team_id,
        score: ScoreDto::default(),
        overtime: None,
    }
}

/// Tests that a game without a visitor is rejected.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn game_requires_both_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let result = EventService::new(db)
        .create(&actor(&team, &admin, Role::Admin), game(Some(team.id), None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}

/// Tests that a negative score is rejected.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn rejects_negative_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let (rival, _) = factory::helpers::create_team_with_admin(db).await?;

    let mut params = game(Some(team.id), Some(rival.id));
    params.score.final_score = PeriodScoreDto {
        home: Some(3),
        visitor: Some(-1),
    };

    let result = EventService::new(db)
        .create(&actor(&team, &admin, Role::Admin), params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}

/// Tests that a valid game is stored with its score.
///
/// Expected: Ok with the final score read back
#[tokio::test]
async fn stores_game_with_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let (rival, _) = factory::helpers::create_team_with_admin(db).await?;

    let mut params = game(Some(team.id), Some(rival.id));
    params.score.final_score = PeriodScoreDto {
        home: Some(4),
        visitor: Some(2),
    };

    let actor = actor(&team, &admin, Role::Admin);
    let service = EventService::new(db);
    let created = service.create(&actor, params).await.unwrap();
    let fetched = service.get_by_id(&actor, created.id).await.unwrap();

    assert_eq!(fetched.score.final_score.home, Some(4));
    assert_eq!(fetched.score.final_score.visitor, Some(2));

    Ok(())
}
