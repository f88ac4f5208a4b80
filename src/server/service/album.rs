use sea_orm::DatabaseConnection;

use crate::server::{
    data::{album::AlbumRepository, scoped::SeaOrmScopedStore},
    engine::{Collection, EnginePolicy, Scope, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        album::{Album, SaveAlbumParams, NEWS_ALBUM_NAME},
        page::{Page, PageRequest},
        user::Actor,
    },
    service::scope_context,
    util::validate,
};

pub struct AlbumService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> AlbumService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Creates an album whose name is unique within the team.
    ///
    /// Creating it as `main` demotes the team's previous main album. The news album name is
    /// reserved for the locked album.
    ///
    /// # Returns
    /// - `Ok(Album)` - Created album
    /// - `Err(ScopeError::Validation)` - Name shorter than 2 characters or reserved
    /// - `Err(ScopeError::Conflict)` - Name already used by the team
    pub async fn create(&self, actor: &Actor, params: SaveAlbumParams) -> Result<Album, AppError> {
        ensure_not_reserved(&params.name)?;
        let name = self.resolve_name(actor, &params.name, None).await?;

        let album = AlbumRepository::new(self.db)
            .create(actor.team_id, Some(actor.user_id), name, params.main, false)
            .await?;

        if album.main {
            self.demote_others(actor.team_id, album.id).await;
        }

        tracing::info!("User {} created album {} ({})", actor.user_id, album.id, album.name);

        Ok(album)
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<Album, AppError> {
        AlbumRepository::new(self.db)
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<Album>, AppError> {
        Ok(AlbumRepository::new(self.db)
            .get_by_team_paginated(actor.team_id, request)
            .await?)
    }

    /// Renames an album and sets its `main` flag. Locked albums keep their name.
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveAlbumParams,
    ) -> Result<Album, AppError> {
        let repo = AlbumRepository::new(self.db);
        let existing = repo
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if !existing.locked {
            ensure_not_reserved(&params.name)?;
        }

        let name = self.resolve_name(actor, &params.name, Some(id)).await?;
        if existing.locked && existing.name != name {
            return Err(ScopeError::Validation(format!(
                "Album \"{}\" is locked and cannot be renamed",
                existing.name
            ))
            .into());
        }

        let album = repo
            .update(actor.team_id, id, name, params.main)
            .await?
            .ok_or_else(|| not_found(id))?;

        if album.main {
            self.demote_others(actor.team_id, album.id).await;
        }

        Ok(album)
    }

    /// Makes an album the team's only main album.
    pub async fn set_main(&self, actor: &Actor, id: i32) -> Result<Album, AppError> {
        let repo = AlbumRepository::new(self.db);
        if !repo.set_main(actor.team_id, id).await? {
            return Err(not_found(id));
        }

        self.demote_others(actor.team_id, id).await;

        repo.find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Tombstones an unlocked album. A deleted main album leaves the team without one.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let repo = AlbumRepository::new(self.db);
        let existing = repo
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if existing.locked {
            return Err(ScopeError::Validation(format!(
                "Album \"{}\" is locked and cannot be deleted",
                existing.name
            ))
            .into());
        }

        if !repo.soft_delete(actor.team_id, id).await? {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted album {}", actor.user_id, id);

        Ok(())
    }

    /// Returns the team's locked news album, creating it on first use.
    pub async fn ensure_news_album(&self, team_id: i32) -> Result<Album, AppError> {
        let repo = AlbumRepository::new(self.db);

        if let Some(album) = repo.find_locked(team_id).await? {
            return Ok(album);
        }

        let album = repo
            .create(team_id, None, NEWS_ALBUM_NAME.to_string(), false, true)
            .await?;

        tracing::info!("Created news album {} for team {}", album.id, team_id);

        Ok(album)
    }

    async fn resolve_name(
        &self,
        actor: &Actor,
        candidate: &str,
        exclude_id: Option<i32>,
    ) -> Result<String, AppError> {
        validate::require_min_chars("Album name", candidate, 2)?;

        let ctx = scope_context(self.db, Collection::Album, actor).await?;
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        Ok(engine
            .resolve_name_collision(candidate, &ctx, exclude_id)
            .await?
            .ensure_allowed()?)
    }

    async fn demote_others(&self, team_id: i32, album_id: i32) {
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        engine
            .set_exclusive(&Scope::tenant(Collection::Album, team_id), album_id)
            .await;
    }
}

/// The locked news album owns its name; user albums may not take it in any case.
fn ensure_not_reserved(name: &str) -> Result<(), ScopeError> {
    if name.trim().eq_ignore_ascii_case(NEWS_ALBUM_NAME) {
        return Err(ScopeError::Validation(format!(
            "\"{}\" is reserved for the news album",
            NEWS_ALBUM_NAME
        )));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("Album {} not found", id)).into()
}
