//! Arena factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ArenaFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city_id: i32,
    visibility: String,
    created_by: Option<i32>,
}

impl<'a> ArenaFactory<'a> {
    /// Defaults: name `"Arena {id}"`, visibility `personal`, no owner.
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Arena {}", id),
            city_id,
            visibility: "personal".to_string(),
            created_by: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::arena::Model, DbErr> {
        let now = Utc::now();
        entity::arena::ActiveModel {
            name: ActiveValue::Set(self.name),
            city_id: ActiveValue::Set(self.city_id),
            visibility: ActiveValue::Set(self.visibility),
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

pub async fn create_arena(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::arena::Model, DbErr> {
    ArenaFactory::new(db, city_id).build().await
}
