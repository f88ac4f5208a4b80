//! Photo factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a photo at `position` inside `album_id`.
///
/// The photo address is unique per call so tests can tell photos apart.
pub async fn create_photo(
    db: &DatabaseConnection,
    team_id: i32,
    album_id: i32,
    position: i32,
) -> Result<entity::photo::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::photo::ActiveModel {
        album_id: ActiveValue::Set(album_id),
        name: ActiveValue::Set(Some(format!("photo-{}.jpg", id))),
        address: ActiveValue::Set(format!("https://img.club.test/photo-{}.jpg", id)),
        position: ActiveValue::Set(position),
        team_id: ActiveValue::Set(team_id),
        created_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
