//! News data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::fetch_page,
    model::{
        news::{News, NewsPhoto, SaveNewsParams},
        page::{Page, PageRequest},
    },
};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        team_id: i32,
        created_by: i32,
        params: SaveNewsParams,
    ) -> Result<News, DbErr> {
        let now = Utc::now();
        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            text: ActiveValue::Set(params.text),
            cover_name: ActiveValue::Set(params.cover.name),
            cover_address: ActiveValue::Set(params.cover.address),
            photos: ActiveValue::Set(photos_json(&params.photos)?),
            pinned: ActiveValue::Set(params.pinned),
            team_id: ActiveValue::Set(team_id),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        News::from_entity(news)
    }

    pub async fn find_by_id(&self, team_id: i32, id: i32) -> Result<Option<News>, DbErr> {
        entity::prelude::News::find_by_id(id)
            .filter(entity::news::Column::TeamId.eq(team_id))
            .filter(entity::news::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .map(News::from_entity)
            .transpose()
    }

    /// Lists live news of a team, pinned article first, then newest first.
    pub async fn get_by_team_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<News>, DbErr> {
        let select = entity::prelude::News::find()
            .filter(entity::news::Column::TeamId.eq(team_id))
            .filter(entity::news::Column::DeletedAt.is_null())
            .order_by_desc(entity::news::Column::Pinned)
            .order_by_desc(entity::news::Column::CreatedAt)
            .order_by_desc(entity::news::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let news = models
            .into_iter()
            .map(News::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(news, total, request))
    }

    pub async fn update(
        &self,
        team_id: i32,
        id: i32,
        params: SaveNewsParams,
    ) -> Result<Option<News>, DbErr> {
        let Some(news) = entity::prelude::News::find_by_id(id)
            .filter(entity::news::Column::TeamId.eq(team_id))
            .filter(entity::news::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::news::ActiveModel = news.into();
        active.title = ActiveValue::Set(params.title);
        active.text = ActiveValue::Set(params.text);
        active.cover_name = ActiveValue::Set(params.cover.name);
        active.cover_address = ActiveValue::Set(params.cover.address);
        active.photos = ActiveValue::Set(photos_json(&params.photos)?);
        active.pinned = ActiveValue::Set(params.pinned);
        active.updated_at = ActiveValue::Set(Utc::now());

        let news = active.update(self.db).await?;

        News::from_entity(news).map(Some)
    }

    /// Flags a live article as pinned; returns whether a row was affected.
    pub async fn set_pinned(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::update_many()
            .filter(entity::news::Column::Id.eq(id))
            .filter(entity::news::Column::TeamId.eq(team_id))
            .filter(entity::news::Column::DeletedAt.is_null())
            .col_expr(
                entity::news::Column::Pinned,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::update_many()
            .filter(entity::news::Column::Id.eq(id))
            .filter(entity::news::Column::TeamId.eq(team_id))
            .filter(entity::news::Column::DeletedAt.is_null())
            .col_expr(
                entity::news::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn photos_json(photos: &[NewsPhoto]) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(photos)
        .map_err(|e| DbErr::Custom(format!("Failed to encode news photos: {}", e)))
}
