//! City factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    visibility: String,
    created_by: Option<i32>,
    deleted: bool,
}

impl<'a> CityFactory<'a> {
    /// Defaults: name `"City {id}"`, visibility `personal`, no owner, not tombstoned.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("City {}", id),
            visibility: "personal".to_string(),
            created_by: None,
            deleted: false,
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

    /// Inserts the city already tombstoned.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        let now = Utc::now();
        entity::city::ActiveModel {
            name: ActiveValue::Set(self.name),
            visibility: ActiveValue::Set(self.visibility),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a personal city without an owner.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
