use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{news::NewsRepository, scoped::SeaOrmScopedStore},
    engine::{Collection, EnginePolicy, Scope, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        news::{News, NewsPhoto, SaveNewsParams},
        page::{Page, PageRequest},
        photo::PhotoUpload,
        user::Actor,
    },
    service::{album::AlbumService, photo::PhotoService},
    util::validate,
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Publishes an article and copies its photos into the team's news album.
    ///
    /// Publishing it pinned unpins the previously pinned article. Neither the unpinning nor
    /// the album copy can fail the write; both only log.
    pub async fn create(&self, actor: &Actor, params: SaveNewsParams) -> Result<News, AppError> {
        let params = validate_news(params)?;
        let photos = params.all_photos();

        let news = NewsRepository::new(self.db)
            .create(actor.team_id, actor.user_id, params)
            .await?;

        if news.pinned {
            self.unpin_others(actor.team_id, news.id).await;
        }
        self.copy_to_news_album(actor, photos).await;

        tracing::info!("User {} published news {}", actor.user_id, news.id);

        Ok(news)
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<News>, AppError> {
        Ok(NewsRepository::new(self.db)
            .get_by_team_paginated(actor.team_id, request)
            .await?)
    }

    /// Updates an article; only photos whose names are new to it reach the news album.
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveNewsParams,
    ) -> Result<News, AppError> {
        let params = validate_news(params)?;
        let repo = NewsRepository::new(self.db);

        let existing = repo
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let known: HashSet<String> = std::iter::once(existing.cover.name)
            .chain(existing.photos.into_iter().map(|p| p.name))
            .collect();
        let added: Vec<NewsPhoto> = params
            .all_photos()
            .into_iter()
            .filter(|photo| !known.contains(&photo.name))
            .collect();

        let news = repo
            .update(actor.team_id, id, params)
            .await?
            .ok_or_else(|| not_found(id))?;

        if news.pinned {
            self.unpin_others(actor.team_id, news.id).await;
        }
        self.copy_to_news_album(actor, added).await;

        Ok(news)
    }

    /// Pins an article and unpins every other article of the team.
    pub async fn pin(&self, actor: &Actor, id: i32) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);
        if !repo.set_pinned(actor.team_id, id).await? {
            return Err(not_found(id));
        }

        self.unpin_others(actor.team_id, id).await;

        repo.find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Tombstones an article. A deleted pinned article leaves the team without one.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db)
            .soft_delete(actor.team_id, id)
            .await?
        {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted news {}", actor.user_id, id);

        Ok(())
    }

    async fn unpin_others(&self, team_id: i32, news_id: i32) {
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        engine
            .set_exclusive(&Scope::tenant(Collection::News, team_id), news_id)
            .await;
    }

    async fn copy_to_news_album(&self, actor: &Actor, photos: Vec<NewsPhoto>) {
        if photos.is_empty() {
            return;
        }

        let album = match AlbumService::new(self.db, self.policy)
            .ensure_news_album(actor.team_id)
            .await
        {
            Ok(album) => album,
            Err(err) => {
                tracing::error!(
                    "Failed to resolve news album for team {}: {}",
                    actor.team_id,
                    err
                );
                return;
            }
        };

        let uploads = photos
            .into_iter()
            .map(|photo| PhotoUpload {
                name: Some(photo.name),
                address: photo.address,
            })
            .collect();

        if let Err(err) = PhotoService::new(self.db, self.policy)
            .append(actor.team_id, Some(actor.user_id), album.id, uploads)
            .await
        {
            tracing::error!(
                "Failed to copy news photos into album {}: {}",
                album.id,
                err
            );
        }
    }
}

fn validate_news(params: SaveNewsParams) -> Result<SaveNewsParams, ScopeError> {
    if params.photos.is_empty() {
        return Err(ScopeError::Validation(
            "News needs at least one photo".to_string(),
        ));
    }

    let photo = |photo: NewsPhoto| -> Result<NewsPhoto, ScopeError> {
        Ok(NewsPhoto {
            name: validate::require_text("Photo name", &photo.name)?,
            address: validate::require_url("Photo address", &photo.address)?,
        })
    };

    Ok(SaveNewsParams {
        title: validate::require_text("Title", &params.title)?,
        text: validate::require_text("Text", &params.text)?,
        cover: photo(params.cover)?,
        photos: params
            .photos
            .into_iter()
            .map(photo)
            .collect::<Result<Vec<_>, _>>()?,
        pinned: params.pinned,
    })
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("News {} not found", id)).into()
}
