use sea_orm::DatabaseConnection;

use crate::server::{
    data::{banner::BannerRepository, scoped::SeaOrmScopedStore},
    engine::{Collection, EnginePolicy, Scope, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        banner::{Banner, SaveBannerParams},
        page::{Page, PageRequest},
        user::Actor,
    },
    util::validate,
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Inserts a banner at its requested position.
    ///
    /// Banners already at or after that position move down by one. The shift runs after the
    /// insert and only logs on failure.
    pub async fn create(&self, actor: &Actor, params: SaveBannerParams) -> Result<Banner, AppError> {
        let params = validate_banner(params)?;

        let banner = BannerRepository::new(self.db)
            .create(actor.team_id, actor.user_id, params)
            .await?;

        self.open_slot(actor.team_id, banner.position, banner.id).await;

        tracing::info!(
            "User {} created banner {} at position {}",
            actor.user_id,
            banner.id,
            banner.position
        );

        Ok(banner)
    }

    /// Any team's live banner, for the public site.
    pub async fn get_by_id(&self, id: i32) -> Result<Banner, AppError> {
        BannerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Banner>, AppError> {
        Ok(BannerRepository::new(self.db)
            .get_by_team_paginated(team_id, request)
            .await?)
    }

    /// Updates a banner; moving it to another position shifts the banners at or after it.
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveBannerParams,
    ) -> Result<Banner, AppError> {
        let params = validate_banner(params)?;
        let repo = BannerRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .filter(|banner| banner.team_id == actor.team_id)
            .ok_or_else(|| not_found(id))?;

        let banner = repo
            .update(actor.team_id, id, params)
            .await?
            .ok_or_else(|| not_found(id))?;

        if banner.position != existing.position {
            self.open_slot(actor.team_id, banner.position, banner.id).await;
        }

        Ok(banner)
    }

    /// Tombstones a banner; the gap it leaves is not closed.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        if !BannerRepository::new(self.db)
            .soft_delete(actor.team_id, id)
            .await?
        {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted banner {}", actor.user_id, id);

        Ok(())
    }

    async fn open_slot(&self, team_id: i32, position: i32, banner_id: i32) {
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        engine
            .reindex_on_insert(
                &Scope::tenant(Collection::Banner, team_id),
                position,
                Some(banner_id),
            )
            .await;
    }
}

fn validate_banner(params: SaveBannerParams) -> Result<SaveBannerParams, ScopeError> {
    Ok(SaveBannerParams {
        position: validate::require_range("Position", params.position, 1..=i32::MAX)?,
        photo: validate::require_url("Photo", &params.photo)?,
        link: validate::require_url("Link", &params.link)?,
        text: validate::optional_min_chars("Text", params.text, 2)?,
    })
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("Banner {} not found", id)).into()
}
