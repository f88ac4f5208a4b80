//! Player factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    first_name: String,
    last_name: String,
    number: i32,
    position: String,
    hidden: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Defaults: `"Player"` `"{id}"`, a number derived from the counter, forward.
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            first_name: "Player".to_string(),
            last_name: id.to_string(),
            number: (id % 100) as i32,
            position: "forward".to_string(),
            hidden: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        entity::player::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            number: ActiveValue::Set(self.number),
            position: ActiveValue::Set(self.position),
            hand: ActiveValue::Set("right".to_string()),
            birth_date: ActiveValue::Set(None),
            height: ActiveValue::Set(None),
            weight: ActiveValue::Set(None),
            photo: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            hidden: ActiveValue::Set(self.hidden),
            team_id: ActiveValue::Set(self.team_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id).build().await
}
