use super::*;

/// Tests that gallery photos are stored and read back with the cover.
///
/// Expected: Ok with two gallery photos and a photo count of three
#[tokio::test]
async fn stores_gallery_photos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
    let repo = NewsRepository::new(db);

    let news = repo
        .create(
            team.id,
            admin.id,
            SaveNewsParams {
                title: "Derby".to_string(),
                text: "We won".to_string(),
                cover: photo("cover.jpg"),
                photos: vec![photo("a.jpg"), photo("b.jpg")],
                pinned: false,
            },
        )
        .await?;

    let stored = repo.find_by_id(team.id, news.id).await?.unwrap();
    assert_eq!(stored.cover.name, "cover.jpg");
    assert_eq!(stored.photos, vec![photo("a.jpg"), photo("b.jpg")]);
    assert_eq!(stored.photos_count(), 3);

    Ok(())
}
