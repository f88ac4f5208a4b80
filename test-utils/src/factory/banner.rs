//! Banner factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BannerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    position: i32,
    photo: String,
    link: String,
}

impl<'a> BannerFactory<'a> {
    /// Defaults: position 1, hosted photo and link URLs unique per banner.
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            position: 1,
            photo: format!("https://img.club.test/banner-{}.jpg", id),
            link: format!("https://club.test/promo/{}", id),
        }
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub async fn build(self) -> Result<entity::banner::Model, DbErr> {
        let now = Utc::now();
        entity::banner::ActiveModel {
            position: ActiveValue::Set(self.position),
            photo: ActiveValue::Set(self.photo),
            link: ActiveValue::Set(self.link),
            text: ActiveValue::Set(None),
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

pub async fn create_banner(
    db: &DatabaseConnection,
    team_id: i32,
    position: i32,
) -> Result<entity::banner::Model, DbErr> {
    BannerFactory::new(db, team_id).position(position).build().await
}
