//! Album factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AlbumFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    name: String,
    locked: bool,
    main: bool,
    deleted: bool,
}

impl<'a> AlbumFactory<'a> {
    /// Defaults: name `"Album {id}"`, unlocked, not main.
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            name: format!("Album {}", id),
            locked: false,
            main: false,
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn main(mut self, main: bool) -> Self {
        self.main = main;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::album::Model, DbErr> {
        let now = Utc::now();
        entity::album::ActiveModel {
            name: ActiveValue::Set(self.name),
            team_id: ActiveValue::Set(self.team_id),
            created_by: ActiveValue::Set(None),
            locked: ActiveValue::Set(self.locked),
            main: ActiveValue::Set(self.main),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_album(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::album::Model, DbErr> {
    AlbumFactory::new(db, team_id).build().await
}
