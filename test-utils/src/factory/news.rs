//! News factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    created_by: i32,
    title: String,
    pinned: bool,
}

impl<'a> NewsFactory<'a> {
    /// Defaults: title `"News {id}"`, not pinned, no gallery photos.
    pub fn new(db: &'a DatabaseConnection, team_id: i32, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            created_by,
            title: format!("News {}", id),
            pinned: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        let now = Utc::now();
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            text: ActiveValue::Set("Match report".to_string()),
            cover_name: ActiveValue::Set("cover.jpg".to_string()),
            cover_address: ActiveValue::Set("https://img.club.test/cover.jpg".to_string()),
            photos: ActiveValue::Set(serde_json::json!([])),
            pinned: ActiveValue::Set(self.pinned),
            team_id: ActiveValue::Set(self.team_id),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_news(
    db: &DatabaseConnection,
    team_id: i32,
    created_by: i32,
) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db, team_id, created_by).build().await
}
