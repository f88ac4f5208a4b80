//! Info article data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::fetch_page,
    model::{
        info::{Info, SaveInfoParams},
        page::{Page, PageRequest},
    },
};

pub struct InfoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InfoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unlocked article. `params.short_title` must already be trimmed.
    pub async fn create(
        &self,
        team_id: i32,
        created_by: i32,
        params: SaveInfoParams,
    ) -> Result<Info, DbErr> {
        let now = Utc::now();
        let info = entity::info::ActiveModel {
            short_title: ActiveValue::Set(params.short_title),
            long_title: ActiveValue::Set(params.long_title),
            text: ActiveValue::Set(params.text),
            position: ActiveValue::Set(params.position),
            locked: ActiveValue::Set(false),
            team_id: ActiveValue::Set(team_id),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Info::from_entity(info))
    }

    /// Finds a live article of any team.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Info>, DbErr> {
        let info = entity::prelude::Info::find_by_id(id)
            .filter(entity::info::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(info.map(Info::from_entity))
    }

    /// Lists live articles of a team by ascending position.
    pub async fn get_by_team_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Info>, DbErr> {
        let select = entity::prelude::Info::find()
            .filter(entity::info::Column::TeamId.eq(team_id))
            .filter(entity::info::Column::DeletedAt.is_null())
            .order_by_asc(entity::info::Column::Position)
            .order_by_asc(entity::info::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let articles = models.into_iter().map(Info::from_entity).collect();

        Ok(Page::new(articles, total, request))
    }

    /// Updates a live article. The `locked` flag is never changed here.
    pub async fn update(
        &self,
        team_id: i32,
        id: i32,
        params: SaveInfoParams,
    ) -> Result<Option<Info>, DbErr> {
        let Some(info) = entity::prelude::Info::find_by_id(id)
            .filter(entity::info::Column::TeamId.eq(team_id))
            .filter(entity::info::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::info::ActiveModel = info.into();
        active.short_title = ActiveValue::Set(params.short_title);
        active.long_title = ActiveValue::Set(params.long_title);
        active.text = ActiveValue::Set(params.text);
        active.position = ActiveValue::Set(params.position);
        active.updated_at = ActiveValue::Set(Utc::now());

        let info = active.update(self.db).await?;

        Ok(Some(Info::from_entity(info)))
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Info::update_many()
            .filter(entity::info::Column::Id.eq(id))
            .filter(entity::info::Column::TeamId.eq(team_id))
            .filter(entity::info::Column::DeletedAt.is_null())
            .col_expr(
                entity::info::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
