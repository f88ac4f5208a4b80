use super::*;

/// Tests that a personal city may not reuse the name of a system city.
///
/// Root of tenant A created the system city "Sofia"; an admin of tenant B submits
/// "sofia" as a personal city.
///
/// Expected: Ok with a rejected resolution of kind system
#[tokio::test]
async fn rejects_name_of_system_city_from_other_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, root) = factory::helpers::create_team_with_member(db, "root").await?;
    let (team_b, admin_b) = factory::helpers::create_team_with_admin(db).await?;
    factory::city::CityFactory::new(db)
        .name("Sofia")
        .visibility("system")
        .created_by(root.id)
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::City, team_b.id, vec![admin_b.id]);

    let resolution = engine
        .resolve_name_collision("sofia", &ctx, None)
        .await
        .unwrap();

    assert!(!resolution.allowed);
    assert_eq!(resolution.normalized, "Sofia");
    assert_eq!(resolution.conflict_kind, Some(ConflictKind::System));

    Ok(())
}

/// Tests that another tenant's personal city does not block the name.
///
/// Expected: Ok with an allowed resolution
#[tokio::test]
async fn allows_name_of_foreign_personal_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, admin_a) = factory::helpers::create_team_with_admin(db).await?;
    let (team_b, admin_b) = factory::helpers::create_team_with_admin(db).await?;
    factory::city::CityFactory::new(db)
        .name("Plovdiv")
        .created_by(admin_a.id)
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::City, team_b.id, vec![admin_b.id]);

    let resolution = engine
        .resolve_name_collision("PLOVDIV", &ctx, None)
        .await
        .unwrap();

    assert!(resolution.allowed);
    assert_eq!(resolution.normalized, "Plovdiv");

    Ok(())
}

/// Tests that player numbers collide per tenant and name the wearer.
///
/// Expected: Ok with a personal conflict whose context is the player's full name
#[tokio::test]
async fn rejects_taken_player_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    factory::player::PlayerFactory::new(db, team.id)
        .first_name("Ivan")
        .last_name("Petrov")
        .number(17)
        .build()
        .await?;

    let store = SeaOrmScopedStore::new(db);
    let engine = ScopeEngine::new(&store, EnginePolicy::default());
    let ctx = ScopeContext::new(Collection::Player, team.id, vec![admin.id]);

    let taken = engine.resolve_number_collision(17, &ctx, None).await.unwrap();
    let free = engine.resolve_number_collision(18, &ctx, None).await.unwrap();

    assert!(!taken.allowed);
    assert_eq!(taken.conflict_kind, Some(ConflictKind::Personal));
    assert_eq!(taken.conflict_context.as_deref(), Some("Ivan Petrov"));
    assert!(free.allowed);

    Ok(())
}
