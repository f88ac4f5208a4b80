//! Info article factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InfoFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    short_title: String,
    position: i32,
    locked: bool,
}

impl<'a> InfoFactory<'a> {
    /// Defaults: short title `"Info {id}"`, position 1, unlocked.
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            short_title: format!("Info {}", id),
            position: 1,
            locked: false,
        }
    }

    pub fn short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = short_title.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub async fn build(self) -> Result<entity::info::Model, DbErr> {
        let now = Utc::now();
        entity::info::ActiveModel {
            long_title: ActiveValue::Set(format!("{} (long)", self.short_title)),
            short_title: ActiveValue::Set(self.short_title),
            text: ActiveValue::Set("Lorem ipsum".to_string()),
            position: ActiveValue::Set(self.position),
            locked: ActiveValue::Set(self.locked),
            team_id: ActiveValue::Set(self.team_id),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_info(
    db: &DatabaseConnection,
    team_id: i32,
    position: i32,
) -> Result<entity::info::Model, DbErr> {
    InfoFactory::new(db, team_id).position(position).build().await
}
