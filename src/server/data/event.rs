//! Event data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::fetch_page,
    model::{
        event::{Event, SaveEventParams},
        page::{Page, PageRequest},
    },
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        team_id: i32,
        created_by: i32,
        params: SaveEventParams,
    ) -> Result<Event, DbErr> {
        let now = Utc::now();
        let mut event = entity::event::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };
        apply_params(&mut event, params);

        let event = event.insert(self.db).await?;

        Event::from_entity(event)
    }

    pub async fn find_by_id(&self, team_id: i32, id: i32) -> Result<Option<Event>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .filter(entity::event::Column::TeamId.eq(team_id))
            .filter(entity::event::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    /// Lists live events of a team, latest date first.
    pub async fn get_by_team_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Event>, DbErr> {
        let select = entity::prelude::Event::find()
            .filter(entity::event::Column::TeamId.eq(team_id))
            .filter(entity::event::Column::DeletedAt.is_null())
            .order_by_desc(entity::event::Column::Date)
            .order_by_desc(entity::event::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let events = models
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(events, total, request))
    }

    pub async fn update(
        &self,
        team_id: i32,
        id: i32,
        params: SaveEventParams,
    ) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id)
            .filter(entity::event::Column::TeamId.eq(team_id))
            .filter(entity::event::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = event.into();
        apply_params(&mut active, params);
        active.updated_at = ActiveValue::Set(Utc::now());

        let event = active.update(self.db).await?;

        Event::from_entity(event).map(Some)
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::update_many()
            .filter(entity::event::Column::Id.eq(id))
            .filter(entity::event::Column::TeamId.eq(team_id))
            .filter(entity::event::Column::DeletedAt.is_null())
            .col_expr(
                entity::event::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn apply_params(active: &mut entity::event::ActiveModel, params: SaveEventParams) {
    let score = params.score;

    active.kind = ActiveValue::Set(params.kind.as_str().to_string());
    active.date = ActiveValue::Set(params.date);
    active.arena_id = ActiveValue::Set(params.arena_id);
    active.city_id = ActiveValue::Set(params.city_id);
    active.description = ActiveValue::Set(params.description);
    active.home_team_id = ActiveValue::Set(params.home_team_id);
    active.visitor_team_id = ActiveValue::Set(params.visitor_team_id);
    active.first_period_home = ActiveValue::Set(score.first_period.home);
    active.first_period_visitor = ActiveValue::Set(score.first_period.visitor);
    active.second_period_home = ActiveValue::Set(score.second_period.home);
    active.second_period_visitor = ActiveValue::Set(score.second_period.visitor);
    active.third_period_home = ActiveValue::Set(score.third_period.home);
    active.third_period_visitor = ActiveValue::Set(score.third_period.visitor);
    active.final_home = ActiveValue::Set(score.final_score.home);
    active.final_visitor = ActiveValue::Set(score.final_score.visitor);
    active.overtime = ActiveValue::Set(params.overtime.map(|o| o.as_str().to_string()));
}
