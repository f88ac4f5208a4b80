use super::*;
use crate::server::{model::info::SaveInfoParams, service::info::InfoService};

fn info(short_title: &str, position: i32) -> SaveInfoParams {
    SaveInfoParams {
        short_title: short_title.to_string(),
        long_title: format!("{} of the club", short_title),
        text: "Founded in 1948.".to_string(),
        position,
    }
}

/// Tests that a locked article keeps its short title.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn refuses_to_rename_locked_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let locked = factory::info::InfoFactory::new(db, team.id)
        .short_title("History")
        .position(1)
        .locked(true)
        .build()
        .await?;

    let result = InfoService::new(db, EnginePolicy::default())
        .update(&actor(&team, &admin, Role::Admin), locked.id, info("Story", 1))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}

/// Tests that short titles collide within the team.
///
/// Expected: Err(ScopeError::Conflict)
#[tokio::test]
async fn rejects_duplicate_short_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    factory::info::InfoFactory::new(db, team.id)
        .short_title("Contacts")
        .position(1)
        .build()
        .await?;

    let result = InfoService::new(db, EnginePolicy::default())
        .create(&actor(&team, &admin, Role::Admin), info("Contacts", 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Conflict { .. }))
    ));

    Ok(())
}
