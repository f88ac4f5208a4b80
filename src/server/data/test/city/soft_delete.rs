use super::*;

/// Tests that deleting a city only tombstones it.
///
/// Expected: Ok(true) once, row still present with deleted_at set, Ok(false) on repeat
#[tokio::test]
async fn tombstones_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::city::create_city(db).await?;
    let repo = CityRepository::new(db);

    assert!(repo.soft_delete(city.id).await?);
    assert!(!repo.soft_delete(city.id).await?);
    assert!(repo.find_by_id(city.id).await?.is_none());

    let row = entity::prelude::City::find_by_id(city.id).one(db).await?.unwrap();
    assert!(row.deleted_at.is_some());

    Ok(())
}
