//! Photo data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::fetch_page,
    model::{
        page::{Page, PageRequest},
        photo::{CreatePhotoParams, Photo},
    },
};

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts photos in the given order and returns them.
    ///
    /// Positions must already have been reserved by the engine's bulk append.
    pub async fn create_many(&self, params: Vec<CreatePhotoParams>) -> Result<Vec<Photo>, DbErr> {
        let now = Utc::now();
        let mut photos = Vec::with_capacity(params.len());

        for photo in params {
            let photo = entity::photo::ActiveModel {
                album_id: ActiveValue::Set(photo.album_id),
                name: ActiveValue::Set(photo.name),
                address: ActiveValue::Set(photo.address),
                position: ActiveValue::Set(photo.position),
                team_id: ActiveValue::Set(photo.team_id),
                created_by: ActiveValue::Set(photo.created_by),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                deleted_at: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            photos.push(Photo::from_entity(photo));
        }

        Ok(photos)
    }

    pub async fn find_by_id(&self, team_id: i32, id: i32) -> Result<Option<Photo>, DbErr> {
        let photo = entity::prelude::Photo::find_by_id(id)
            .filter(entity::photo::Column::TeamId.eq(team_id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(photo.map(Photo::from_entity))
    }

    /// Lists live photos of an album by ascending position.
    pub async fn get_by_album_paginated(
        &self,
        team_id: i32,
        album_id: i32,
        request: PageRequest,
    ) -> Result<Page<Photo>, DbErr> {
        let select = entity::prelude::Photo::find()
            .filter(entity::photo::Column::TeamId.eq(team_id))
            .filter(entity::photo::Column::AlbumId.eq(album_id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .order_by_asc(entity::photo::Column::Position)
            .order_by_asc(entity::photo::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let photos = models.into_iter().map(Photo::from_entity).collect();

        Ok(Page::new(photos, total, request))
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Photo::update_many()
            .filter(entity::photo::Column::Id.eq(id))
            .filter(entity::photo::Column::TeamId.eq(team_id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .col_expr(
                entity::photo::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
