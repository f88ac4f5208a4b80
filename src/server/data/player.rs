//! Player data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::fetch_page,
    model::{
        page::{Page, PageRequest},
        player::{Player, SavePlayerParams},
    },
};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a player. Names must already be formatted and the number checked.
    pub async fn create(&self, team_id: i32, params: SavePlayerParams) -> Result<Player, DbErr> {
        let now = Utc::now();
        let player = entity::player::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            number: ActiveValue::Set(params.number),
            position: ActiveValue::Set(params.position.as_str().to_string()),
            hand: ActiveValue::Set(params.hand.as_str().to_string()),
            birth_date: ActiveValue::Set(params.birth_date),
            height: ActiveValue::Set(params.height),
            weight: ActiveValue::Set(params.weight),
            photo: ActiveValue::Set(params.photo),
            description: ActiveValue::Set(params.description),
            hidden: ActiveValue::Set(params.hidden),
            team_id: ActiveValue::Set(team_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Player::from_entity(player)
    }

    /// Finds a live player of `team_id`.
    pub async fn find_by_id(&self, team_id: i32, id: i32) -> Result<Option<Player>, DbErr> {
        entity::prelude::Player::find_by_id(id)
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Finds a live player that is not hidden from the public site.
    pub async fn find_public(&self, id: i32) -> Result<Option<Player>, DbErr> {
        entity::prelude::Player::find_by_id(id)
            .filter(entity::player::Column::Hidden.eq(false))
            .filter(entity::player::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Lists live players of a team ordered by shirt number.
    ///
    /// # Arguments
    /// - `team_id` - Tenant whose roster is listed
    /// - `include_hidden` - Whether hidden players are part of the listing
    /// - `request` - Page to fetch
    pub async fn get_by_team_paginated(
        &self,
        team_id: i32,
        include_hidden: bool,
        request: PageRequest,
    ) -> Result<Page<Player>, DbErr> {
        let mut select = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::DeletedAt.is_null());
        if !include_hidden {
            select = select.filter(entity::player::Column::Hidden.eq(false));
        }
        let select = select
            .order_by_asc(entity::player::Column::Number)
            .order_by_asc(entity::player::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let players = models
            .into_iter()
            .map(Player::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(players, total, request))
    }

    pub async fn update(
        &self,
        team_id: i32,
        id: i32,
        params: SavePlayerParams,
    ) -> Result<Option<Player>, DbErr> {
        let Some(player) = entity::prelude::Player::find_by_id(id)
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::player::ActiveModel = player.into();
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.number = ActiveValue::Set(params.number);
        active.position = ActiveValue::Set(params.position.as_str().to_string());
        active.hand = ActiveValue::Set(params.hand.as_str().to_string());
        active.birth_date = ActiveValue::Set(params.birth_date);
        active.height = ActiveValue::Set(params.height);
        active.weight = ActiveValue::Set(params.weight);
        active.photo = ActiveValue::Set(params.photo);
        active.description = ActiveValue::Set(params.description);
        active.hidden = ActiveValue::Set(params.hidden);
        active.updated_at = ActiveValue::Set(Utc::now());

        let player = active.update(self.db).await?;

        Player::from_entity(player).map(Some)
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::update_many()
            .filter(entity::player::Column::Id.eq(id))
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::DeletedAt.is_null())
            .col_expr(
                entity::player::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
