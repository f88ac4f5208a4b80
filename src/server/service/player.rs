use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, scoped::SeaOrmScopedStore},
    engine::{normalize::format_person_name, Collection, EnginePolicy, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        page::{Page, PageRequest},
        player::{Player, SavePlayerParams},
        user::Actor,
    },
    service::scope_context,
    util::validate,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Adds a player to the caller's roster.
    ///
    /// # Returns
    /// - `Ok(Player)` - Created player with formatted names
    /// - `Err(ScopeError::Validation)` - Invalid names, number, measurements or photo URL
    /// - `Err(ScopeError::Conflict)` - Number already worn by a teammate
    pub async fn create(&self, actor: &Actor, params: SavePlayerParams) -> Result<Player, AppError> {
        let params = validate_player(params)?;
        self.ensure_number_free(actor, params.number, None).await?;

        let player = PlayerRepository::new(self.db)
            .create(actor.team_id, params)
            .await?;

        tracing::info!(
            "User {} added player {} (#{}) to team {}",
            actor.user_id,
            player.id,
            player.number,
            actor.team_id
        );

        Ok(player)
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Roster of the caller's team, hidden players included.
    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<Player>, AppError> {
        Ok(PlayerRepository::new(self.db)
            .get_by_team_paginated(actor.team_id, true, request)
            .await?)
    }

    /// Public roster of any team; hidden players are left out.
    pub async fn get_public_paginated(
        &self,
        team_id: i32,
        request: PageRequest,
    ) -> Result<Page<Player>, AppError> {
        Ok(PlayerRepository::new(self.db)
            .get_by_team_paginated(team_id, false, request)
            .await?)
    }

    pub async fn get_public(&self, id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_public(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SavePlayerParams,
    ) -> Result<Player, AppError> {
        let params = validate_player(params)?;
        self.ensure_number_free(actor, params.number, Some(id)).await?;

        PlayerRepository::new(self.db)
            .update(actor.team_id, id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        if !PlayerRepository::new(self.db)
            .soft_delete(actor.team_id, id)
            .await?
        {
            return Err(not_found(id));
        }

        tracing::info!("User {} removed player {}", actor.user_id, id);

        Ok(())
    }

    async fn ensure_number_free(
        &self,
        actor: &Actor,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let ctx = scope_context(self.db, Collection::Player, actor).await?;
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        engine
            .resolve_number_collision(number, &ctx, exclude_id)
            .await?
            .ensure_allowed()?;

        Ok(())
    }
}

/// Checks ranges and formats names the way they are displayed on the roster.
fn validate_player(params: SavePlayerParams) -> Result<SavePlayerParams, ScopeError> {
    let first_name = validate::require_min_chars("First name", &params.first_name, 2)?;
    let first_name = validate::require_single_word("First name", &first_name)?;
    let last_name = validate::require_min_chars("Last name", &params.last_name, 2)?;
    let last_name = validate::require_single_word("Last name", &last_name)?;

    Ok(SavePlayerParams {
        first_name: format_person_name(&first_name),
        last_name: format_person_name(&last_name),
        number: validate::require_range("Number", params.number, 0..=99)?,
        height: validate::optional_range("Height", params.height, 1..=300)?,
        weight: validate::optional_range("Weight", params.weight, 1..=300)?,
        photo: validate::optional_url("Photo", params.photo)?,
        description: validate::optional_text(params.description),
        ..params
    })
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("Player {} not found", id)).into()
}
