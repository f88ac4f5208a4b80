use super::*;
use crate::server::{model::city::SaveCityParams, service::city::CityService};

/// Tests that a non-root user cannot create a system city.
///
/// Expected: Err(ScopeError::Privilege) and nothing persisted
#[tokio::test]
async fn rejects_system_city_from_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let service = CityService::new(db, EnginePolicy::default());

    let result = service
        .create(
            &actor(&team, &admin, Role::Admin),
            SaveCityParams {
                name: "Varna".to_string(),
                visibility: Visibility::System,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Privilege(_)))
    ));

    Ok(())
}

/// Tests that a tenant cannot shadow a system city with a personal one.
///
/// Expected: Err(ScopeError::Conflict) of kind system
#[tokio::test]
async fn rejects_personal_city_shadowing_system_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (root_team, root) = factory::helpers::create_team_with_member(db, "root").await?;
    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let service = CityService::new(db, EnginePolicy::default());

    service
        .create(
            &actor(&root_team, &root, Role::Root),
            SaveCityParams {
                name: "  stara   zagora ".to_string(),
                visibility: Visibility::System,
            },
        )
        .await
        .unwrap();

    let result = service
        .create(
            &actor(&team, &admin, Role::Admin),
            SaveCityParams {
                name: "STARA ZAGORA".to_string(),
                visibility: Visibility::Personal,
            },
        )
        .await;

    match result {
        Err(AppError::ScopeErr(ScopeError::Conflict { kind, .. })) => {
            assert_eq!(kind, ConflictKind::System)
        }
        other => panic!("expected system conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that the created city carries the normalized name and is editable by its tenant.
///
/// Expected: Ok with name "Veliko Tarnovo" and can_edit true
#[tokio::test]
async fn creates_personal_city_with_normalized_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let service = CityService::new(db, EnginePolicy::default());

    let created = service
        .create(
            &actor(&team, &admin, Role::Admin),
            SaveCityParams {
                name: "veliko  TARNOVO".to_string(),
                visibility: Visibility::Personal,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.item.name, "Veliko Tarnovo");
    assert!(created.can_edit);

    Ok(())
}
