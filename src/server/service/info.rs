use sea_orm::DatabaseConnection;

use crate::server::{
    data::{info::InfoRepository, scoped::SeaOrmScopedStore},
    engine::{Collection, EnginePolicy, Scope, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        info::{Info, SaveInfoParams},
        page::{Page, PageRequest},
        user::Actor,
    },
    service::scope_context,
    util::validate,
};

pub struct InfoService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> InfoService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Creates an article whose short title is unique within the team.
    ///
    /// # Returns
    /// - `Ok(Info)` - Created article, placed at its requested position
    /// - `Err(ScopeError::Validation)` - Titles or text shorter than 2 characters, or position
    ///   below 1
    /// - `Err(ScopeError::Conflict)` - Short title already used by the team
    pub async fn create(&self, actor: &Actor, params: SaveInfoParams) -> Result<Info, AppError> {
        let params = validate_info(params)?;
        let short_title = self
            .resolve_short_title(actor, &params.short_title, None)
            .await?;

        let info = InfoRepository::new(self.db)
            .create(
                actor.team_id,
                actor.user_id,
                SaveInfoParams {
                    short_title,
                    ..params
                },
            )
            .await?;

        self.open_slot(actor.team_id, info.position, info.id).await;

        tracing::info!("User {} created info article {}", actor.user_id, info.id);

        Ok(info)
    }

    /// Any team's live article, for the public site.
    pub async fn get_by_id(&self, id: i32) -> Result<Info, AppError> {
        InfoRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Info>, AppError> {
        Ok(InfoRepository::new(self.db)
            .get_by_team_paginated(team_id, request)
            .await?)
    }

    /// Updates an article. Locked articles keep their short title.
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveInfoParams,
    ) -> Result<Info, AppError> {
        let params = validate_info(params)?;
        let repo = InfoRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .filter(|info| info.team_id == actor.team_id)
            .ok_or_else(|| not_found(id))?;

        if existing.locked && existing.short_title != params.short_title {
            return Err(ScopeError::Validation(format!(
                "Info article \"{}\" is locked and cannot be renamed",
                existing.short_title
            ))
            .into());
        }

        let short_title = self
            .resolve_short_title(actor, &params.short_title, Some(id))
            .await?;

        let info = repo
            .update(
                actor.team_id,
                id,
                SaveInfoParams {
                    short_title,
                    ..params
                },
            )
            .await?
            .ok_or_else(|| not_found(id))?;

        if info.position != existing.position {
            self.open_slot(actor.team_id, info.position, info.id).await;
        }

        Ok(info)
    }

    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let repo = InfoRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .filter(|info| info.team_id == actor.team_id)
            .ok_or_else(|| not_found(id))?;

        if existing.locked {
            return Err(ScopeError::Validation(format!(
                "Info article \"{}\" is locked and cannot be deleted",
                existing.short_title
            ))
            .into());
        }

        if !repo.soft_delete(actor.team_id, id).await? {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted info article {}", actor.user_id, id);

        Ok(())
    }

    async fn resolve_short_title(
        &self,
        actor: &Actor,
        candidate: &str,
        exclude_id: Option<i32>,
    ) -> Result<String, AppError> {
        let ctx = scope_context(self.db, Collection::Info, actor).await?;
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        Ok(engine
            .resolve_name_collision(candidate, &ctx, exclude_id)
            .await?
            .ensure_allowed()?)
    }

    async fn open_slot(&self, team_id: i32, position: i32, info_id: i32) {
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        engine
            .reindex_on_insert(
                &Scope::tenant(Collection::Info, team_id),
                position,
                Some(info_id),
            )
            .await;
    }
}

fn validate_info(params: SaveInfoParams) -> Result<SaveInfoParams, ScopeError> {
    Ok(SaveInfoParams {
        short_title: validate::require_min_chars("Short title", &params.short_title, 2)?,
        long_title: validate::require_min_chars("Long title", &params.long_title, 2)?,
        text: validate::require_min_chars("Text", &params.text, 2)?,
        position: validate::require_range("Position", params.position, 1..=i32::MAX)?,
    })
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("Info article {} not found", id)).into()
}
