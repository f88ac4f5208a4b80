use super::*;

/// Tests which cities a tenant can read.
///
/// Own personal cities, system cities and shared cities are visible; another tenant's
/// personal city and tombstoned cities are not.
///
/// Expected: Ok with three cities sorted by name
#[tokio::test]
async fn lists_own_system_and_shared_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, me) = factory::helpers::create_team_with_admin(db).await?;
    let (_, other) = factory::helpers::create_team_with_admin(db).await?;
    let repo = CityRepository::new(db);

    repo.create(
        SaveCityParams {
            name: "Burgas".to_string(),
            visibility: Visibility::Personal,
        },
        me.id,
    )
    .await?;
    repo.create(
        SaveCityParams {
            name: "Aytos".to_string(),
            visibility: Visibility::Shared,
        },
        other.id,
    )
    .await?;
    repo.create(
        SaveCityParams {
            name: "Varna".to_string(),
            visibility: Visibility::Personal,
        },
        other.id,
    )
    .await?;
    factory::city::CityFactory::new(db)
        .name("Sofia")
        .visibility("system")
        .build()
        .await?;
    factory::city::CityFactory::new(db)
        .name("Ruse")
        .visibility("system")
        .deleted(true)
        .build()
        .await?;

    let page = repo
        .get_visible_paginated(&[me.id], PageRequest::default())
        .await?;

    let names: Vec<&str> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Aytos"));
    assert!(names.contains(&"Burgas"));
    assert!(names.contains(&"Sofia"));
    assert!(!names.contains(&"Varna"));
    assert!(!names.contains(&"Ruse"));

    Ok(())
}

/// Tests pagination metadata of the visible listing.
///
/// Expected: Ok with two items on the first page and two total pages
#[tokio::test]
async fn paginates_visible_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, me) = factory::helpers::create_team_with_admin(db).await?;
    for name in ["Alfa", "Bravo", "Charlie"] {
        factory::city::CityFactory::new(db)
            .name(name)
            .created_by(me.id)
            .build()
            .await?;
    }

    let page = CityRepository::new(db)
        .get_visible_paginated(
            &[me.id],
            PageRequest {
                page: 0,
                per_page: 2,
                unpaginated: false,
            },
        )
        .await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);

    Ok(())
}
