//! Album data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::{
    data::fetch_page,
    model::{
        album::Album,
        page::{Page, PageRequest},
    },
};

pub struct AlbumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlbumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an album. `name` must already be trimmed and checked for collisions.
    ///
    /// # Arguments
    /// - `team_id` - Owning tenant
    /// - `created_by` - Creating user, `None` for system-managed albums
    /// - `name` - Album name
    /// - `main` - Whether the album is flagged as the team's main album
    /// - `locked` - Whether the album is system-managed
    pub async fn create(
        &self,
        team_id: i32,
        created_by: Option<i32>,
        name: String,
        main: bool,
        locked: bool,
    ) -> Result<Album, DbErr> {
        let now = Utc::now();
        let album = entity::album::ActiveModel {
            name: ActiveValue::Set(name),
            team_id: ActiveValue::Set(team_id),
            created_by: ActiveValue::Set(created_by),
            locked: ActiveValue::Set(locked),
            main: ActiveValue::Set(main),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Album::from_entity(album, 0))
    }

    /// Finds a live album of `team_id` with its live photo count.
    pub async fn find_by_id(&self, team_id: i32, id: i32) -> Result<Option<Album>, DbErr> {
        let album = entity::prelude::Album::find_by_id(id)
            .filter(entity::album::Column::TeamId.eq(team_id))
            .filter(entity::album::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        self.with_photo_count(album).await
    }

    /// Finds the team's locked album, which collects news photos.
    pub async fn find_locked(&self, team_id: i32) -> Result<Option<Album>, DbErr> {
        let album = entity::prelude::Album::find()
            .filter(entity::album::Column::TeamId.eq(team_id))
            .filter(entity::album::Column::Locked.eq(true))
            .filter(entity::album::Column::DeletedAt.is_null())
            .order_by_asc(entity::album::Column::Id)
            .one(self.db)
            .await?;

        self.with_photo_count(album).await
    }

    /// Lists live albums of a team, main album first, then newest first.
    pub async fn get_by_team_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Album>, DbErr> {
        let select = entity::prelude::Album::find()
            .filter(entity::album::Column::TeamId.eq(team_id))
            .filter(entity::album::Column::DeletedAt.is_null())
            .order_by_desc(entity::album::Column::Main)
            .order_by_desc(entity::album::Column::CreatedAt)
            .order_by_desc(entity::album::Column::Id);

        let (models, total) = fetch_page(self.db, select, request).await?;

        let album_ids: Vec<i32> = models.iter().map(|a| a.id).collect();
        let counts = self.photo_counts(&album_ids).await?;

        let albums = models
            .into_iter()
            .map(|album| {
                let count = counts.get(&album.id).copied().unwrap_or(0);
                Album::from_entity(album, count)
            })
            .collect();

        Ok(Page::new(albums, total, request))
    }

    /// Renames an album and sets its `main` flag.
    pub async fn update(
        &self,
        team_id: i32,
        id: i32,
        name: String,
        main: bool,
    ) -> Result<Option<Album>, DbErr> {
        let Some(album) = entity::prelude::Album::find_by_id(id)
            .filter(entity::album::Column::TeamId.eq(team_id))
            .filter(entity::album::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::album::ActiveModel = album.into();
        active.name = ActiveValue::Set(name);
        active.main = ActiveValue::Set(main);
        active.updated_at = ActiveValue::Set(Utc::now());

        let album = active.update(self.db).await?;

        self.with_photo_count(Some(album)).await
    }

    /// Flags a live album as main; returns whether a row was affected.
    pub async fn set_main(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Album::update_many()
            .filter(entity::album::Column::Id.eq(id))
            .filter(entity::album::Column::TeamId.eq(team_id))
            .filter(entity::album::Column::DeletedAt.is_null())
            .col_expr(
                entity::album::Column::Main,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn soft_delete(&self, team_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Album::update_many()
            .filter(entity::album::Column::Id.eq(id))
            .filter(entity::album::Column::TeamId.eq(team_id))
            .filter(entity::album::Column::DeletedAt.is_null())
            .col_expr(
                entity::album::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_photo_count(
        &self,
        album: Option<entity::album::Model>,
    ) -> Result<Option<Album>, DbErr> {
        let Some(album) = album else {
            return Ok(None);
        };

        let count = self
            .photo_counts(&[album.id])
            .await?
            .get(&album.id)
            .copied()
            .unwrap_or(0);

        Ok(Some(Album::from_entity(album, count)))
    }

    /// Live photo counts keyed by album id; albums without photos are absent.
    async fn photo_counts(&self, album_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if album_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Photo::find()
            .select_only()
            .column(entity::photo::Column::AlbumId)
            .column_as(
                Expr::from(Func::count(Expr::col(entity::photo::Column::Id))),
                "photos",
            )
            .filter(entity::photo::Column::AlbumId.is_in(album_ids.to_vec()))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .group_by(entity::photo::Column::AlbumId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(album_id, count)| (album_id, count.max(0) as u64))
            .collect())
    }
}
