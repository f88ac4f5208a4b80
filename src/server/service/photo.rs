use sea_orm::DatabaseConnection;

use crate::server::{
    data::{album::AlbumRepository, photo::PhotoRepository, scoped::SeaOrmScopedStore},
    engine::{Collection, EnginePolicy, PositionPair, Scope, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        page::{Page, PageRequest},
        photo::{CreatePhotoParams, Photo, PhotoUpload},
        user::Actor,
    },
    util::validate,
};

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Registers already-hosted photos at the front of an album.
    ///
    /// # Returns
    /// - `Ok(Vec<Photo>)` - Created photos at positions `0..n` in upload order
    /// - `Err(ScopeError::NotFound)` - Album not in the caller's team
    /// - `Err(ScopeError::Validation)` - No photos, or an address is not a URL
    pub async fn upload(
        &self,
        actor: &Actor,
        album_id: i32,
        uploads: Vec<PhotoUpload>,
    ) -> Result<Vec<Photo>, AppError> {
        self.require_album(actor.team_id, album_id).await?;

        if uploads.is_empty() {
            return Err(ScopeError::Validation("At least one photo is required".to_string()).into());
        }

        let photos = self
            .append(actor.team_id, Some(actor.user_id), album_id, uploads)
            .await?;

        tracing::info!(
            "User {} added {} photo(s) to album {}",
            actor.user_id,
            photos.len(),
            album_id
        );

        Ok(photos)
    }

    /// Prepends photos to an album, shifting its existing photos by the upload count.
    pub async fn append(
        &self,
        team_id: i32,
        created_by: Option<i32>,
        album_id: i32,
        uploads: Vec<PhotoUpload>,
    ) -> Result<Vec<Photo>, AppError> {
        let uploads = uploads
            .into_iter()
            .map(|upload| {
                Ok(PhotoUpload {
                    name: validate::optional_text(upload.name),
                    address: validate::require_url("Photo address", &upload.address)?,
                })
            })
            .collect::<Result<Vec<_>, ScopeError>>()?;

        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);
        let offsets = engine
            .reindex_bulk_append(
                &Scope::within(Collection::Photo, team_id, album_id),
                uploads.len(),
            )
            .await;

        let params = uploads
            .into_iter()
            .zip(offsets)
            .map(|(upload, position)| CreatePhotoParams {
                album_id,
                team_id,
                created_by,
                name: upload.name,
                address: upload.address,
                position,
            })
            .collect();

        Ok(PhotoRepository::new(self.db).create_many(params).await?)
    }

    pub async fn get_by_album(
        &self,
        actor: &Actor,
        album_id: i32,
        request: PageRequest,
    ) -> Result<Page<Photo>, AppError> {
        self.require_album(actor.team_id, album_id).await?;

        Ok(PhotoRepository::new(self.db)
            .get_by_album_paginated(actor.team_id, album_id, request)
            .await?)
    }

    /// Writes explicit positions for photos of one album.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of photos whose position was written
    /// - `Err(ScopeError::Validation)` - The list failed validation under the strict policy
    pub async fn reorder(
        &self,
        actor: &Actor,
        album_id: i32,
        pairs: Vec<PositionPair>,
    ) -> Result<u64, AppError> {
        self.require_album(actor.team_id, album_id).await?;

        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);
        let applied = engine
            .apply_reorder_list(
                &Scope::within(Collection::Photo, actor.team_id, album_id),
                &pairs,
            )
            .await?;

        tracing::debug!("Reordered {} photo(s) in album {}", applied, album_id);

        Ok(applied)
    }

    /// Moves a photo to the front of another album of the same team.
    pub async fn move_to_album(
        &self,
        actor: &Actor,
        photo_id: i32,
        album_id: i32,
    ) -> Result<Photo, AppError> {
        let repo = PhotoRepository::new(self.db);
        let photo = repo
            .find_by_id(actor.team_id, photo_id)
            .await?
            .ok_or_else(|| not_found(photo_id))?;
        self.require_album(actor.team_id, album_id).await?;

        if photo.album_id == album_id {
            return Err(ScopeError::Validation(format!(
                "Photo {} is already in album {}",
                photo_id, album_id
            ))
            .into());
        }

        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);
        engine
            .move_across_scope(
                photo_id,
                &Scope::within(Collection::Photo, actor.team_id, photo.album_id),
                &Scope::within(Collection::Photo, actor.team_id, album_id),
            )
            .await?;

        repo.find_by_id(actor.team_id, photo_id)
            .await?
            .ok_or_else(|| not_found(photo_id))
    }

    /// Tombstones a photo; the gap it leaves is not closed.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        if !PhotoRepository::new(self.db)
            .soft_delete(actor.team_id, id)
            .await?
        {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn require_album(&self, team_id: i32, album_id: i32) -> Result<(), AppError> {
        AlbumRepository::new(self.db)
            .find_by_id(team_id, album_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ScopeError::NotFound(format!("Album {} not found", album_id)).into())
    }
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("Photo {} not found", id)).into()
}
