use super::*;
use crate::server::{
    model::{
        arena::{Arena, SaveArenaParams},
        page::Page,
        Editable,
    },
    service::arena::ArenaService,
};

fn arena_in(city_id: i32, name: &str, visibility: Visibility) -> SaveArenaParams {
    SaveArenaParams {
        name: name.to_string(),
        city_id,
        visibility,
    }
}

/// Tests that an arena name already used by the tenant in another city is rejected.
///
/// Expected: Err(ScopeError::Conflict) of kind personal
#[tokio::test]
async fn rejects_duplicate_name_across_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let sofia = factory::city::CityFactory::new(db)
        .name("Sofia")
        .visibility("shared")
        .build()
        .await?;
    let varna = factory::city::CityFactory::new(db)
        .name("Varna")
        .visibility("shared")
        .build()
        .await?;
    let actor = actor(&team, &admin, Role::Admin);
    let service = ArenaService::new(db, EnginePolicy::default());

    let first = service
        .create(&actor, arena_in(sofia.id, "Ice Hall", Visibility::Personal))
        .await
        .unwrap();
    assert_eq!(first.item.name, "Ice Hall");

    let result = service
        .create(&actor, arena_in(varna.id, "ice hall", Visibility::Personal))
        .await;

    match result {
        Err(AppError::ScopeErr(ScopeError::Conflict { kind, .. })) => {
            assert_eq!(kind, ConflictKind::Personal)
        }
        other => panic!("expected personal conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that renaming an arena onto a system arena's name is rejected.
///
/// Expected: Err(ScopeError::Conflict) of kind system
#[tokio::test]
async fn rename_onto_system_arena_conflicts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let city = factory::city::CityFactory::new(db)
        .visibility("system")
        .build()
        .await?;
    factory::arena::ArenaFactory::new(db, city.id)
        .name("Winter Palace")
        .visibility("system")
        .build()
        .await?;
    let own = factory::arena::ArenaFactory::new(db, city.id)
        .name("Small Rink")
        .created_by(admin.id)
        .build()
        .await?;

    let result = ArenaService::new(db, EnginePolicy::default())
        .update(
            &actor(&team, &admin, Role::Admin),
            own.id,
            arena_in(city.id, "winter PALACE", Visibility::Personal),
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

/// Tests that arena names need at least two characters.
///
/// Expected: Err(ScopeError::Validation)
#[tokio::test]
async fn rejects_single_character_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let city = factory::city::CityFactory::new(db)
        .visibility("shared")
        .build()
        .await?;

    let result = ArenaService::new(db, EnginePolicy::default())
        .create(
            &actor(&team, &admin, Role::Admin),
            arena_in(city.id, "X", Visibility::Personal),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScopeErr(ScopeError::Validation(_)))
    ));

    Ok(())
}

/// Tests `can_edit` on the arena list for an admin and for root.
///
/// Expected: system arena editable by root only, own arena editable by its tenant
#[tokio::test]
async fn list_marks_editable_arenas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let (root_team, root) = factory::helpers::create_team_with_member(db, "root").await?;
    let city = factory::city::CityFactory::new(db)
        .visibility("system")
        .build()
        .await?;
    let own = factory::arena::ArenaFactory::new(db, city.id)
        .created_by(admin.id)
        .build()
        .await?;
    let system = factory::arena::ArenaFactory::new(db, city.id)
        .visibility("system")
        .build()
        .await?;

    let service = ArenaService::new(db, EnginePolicy::default());
    let all = PageRequest {
        unpaginated: true,
        ..PageRequest::default()
    };
    let admin_page = service
        .get_paginated(&actor(&team, &admin, Role::Admin), all)
        .await
        .unwrap();
    let root_page = service
        .get_paginated(&actor(&root_team, &root, Role::Root), all)
        .await
        .unwrap();

    let editable = |page: &Page<Editable<Arena>>, id: i32| {
        page.items
            .iter()
            .find(|entry| entry.item.id == id)
            .map(|entry| entry.can_edit)
    };
    assert_eq!(editable(&admin_page, own.id), Some(true));
    assert_eq!(editable(&admin_page, system.id), Some(false));
    assert_eq!(editable(&root_page, system.id), Some(true));
    assert_eq!(editable(&root_page, own.id), None);

    Ok(())
}
