//! Banner data repository.
//!
//! Banners are ordered by `position` within their team. Position shifts on insert are run by
//! the engine; this repository only writes the banner row itself.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::fetch_page,
    model::{
        banner::{Banner, SaveBannerParams},
        page::{Page, PageRequest},
    },
};

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        team_id: i32,
        created_by: i32,
        params: SaveBannerParams,
    ) -> Result<Banner, DbErr> {
        let now = Utc::now();
        let banner = entity::banner::ActiveModel {
            position: ActiveValue::Set(params.position),
            photo: ActiveValue::Set(params.photo),
            link: ActiveValue::Set(params.link),
            text: ActiveValue::Set(params.text),
            team_id: ActiveValue::Set(team_id),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Banner::from_entity(banner))
    }

    /// Finds a live banner of any team.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Banner>, DbErr> {
        let banner = entity::prelude::Banner::find_by_id(id)
            .filter(entity::banner::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(banner.map(Banner::from_entity))
    }

    /// Lists live banners of a team by ascending position.
    pub async fn get_by_team_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Banner>, DbErr> {
        let select = entity::prelude::Banner::find()
            .filter(entity::banner::Column::TeamId.eq(team_id))
            .filter(entity::banner::Column::DeletedAt.is_null())
            .order_by_asc(entity::banner::Column::Position)
            .order_by_asc(entity::banner::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let banners = models.into_iter().map(Banner::from_entity).collect();

        Ok(Page::new(banners, total, request))
    }

    pub async fn update(
        &self,
        team_id: i32,
        id: i32,
        params: SaveBannerParams,
    ) -> Result<Option<Banner>, DbErr> {
        let Some(banner) = entity::prelude::Banner::find_by_id(id)
            .filter(entity::banner::Column::TeamId.eq(team_id))
            .filter(entity::banner::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::banner::ActiveModel = banner.into();
        active.position = ActiveValue::Set(params.position);
        active.photo = ActiveValue::Set(params.photo);
        active.link = ActiveValue::Set(params.link);
        active.text = ActiveValue::Set(params.text);
        active.updated_at = ActiveValue::Set(Utc::now());

        let banner = active.update(self.db).await?;

        Ok(Some(Banner::from_entity(banner)))
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::update_many()
            .filter(entity::banner::Column::Id.eq(id))
            .filter(entity::banner::Column::TeamId.eq(team_id))
            .filter(entity::banner::Column::DeletedAt.is_null())
            .col_expr(
                entity::banner::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
