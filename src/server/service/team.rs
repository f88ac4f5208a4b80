use sea_orm::DatabaseConnection;

use crate::server::{
    data::{scoped::SeaOrmScopedStore, team::TeamRepository},
    engine::{require_privilege, Collection, EnginePolicy, ScopeContext, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        city::{can_edit, is_visible},
        page::{Page, PageRequest},
        team::{SaveTeamParams, Team},
        user::Actor,
        Editable,
    },
    service::{ensure_editable, scope_context, visible_city},
    util::validate,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a team in a city visible to the tenant.
    ///
    /// Team names are unique per city: the collision check only considers teams of the
    /// same city and names that city in the conflict.
    ///
    /// # Returns
    /// - `Ok(Editable<Team>)` - Created team
    /// - `Err(ScopeError::Privilege)` - Non-root caller requested `system` visibility
    /// - `Err(ScopeError::NotFound)` - City not visible to the tenant
    /// - `Err(ScopeError::Validation)` - Logo is not a URL
    /// - `Err(ScopeError::Conflict)` - Name taken in that city
    pub async fn create(
        &self,
        actor: &Actor,
        params: SaveTeamParams,
    ) -> Result<Editable<Team>, AppError> {
        require_privilege(params.visibility, actor.role)?;

        let ctx = scope_context(self.db, Collection::Team, actor).await?;
        let (ctx, params) = self.prepare(ctx, params, None).await?;

        let team = TeamRepository::new(self.db)
            .create(params, actor.user_id)
            .await?;

        tracing::info!("User {} created team {} ({})", actor.user_id, team.id, team.name);

        Ok(editable(team, actor, &ctx.members))
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<Editable<Team>, AppError> {
        let ctx = scope_context(self.db, Collection::Team, actor).await?;
        let team = self.find_visible(id, &ctx.members).await?;

        Ok(editable(team, actor, &ctx.members))
    }

    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<Editable<Team>>, AppError> {
        let ctx = scope_context(self.db, Collection::Team, actor).await?;
        let page = TeamRepository::new(self.db)
            .get_visible_paginated(&ctx.members, request)
            .await?;

        Ok(page.map(|team| editable(team, actor, &ctx.members)))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveTeamParams,
    ) -> Result<Editable<Team>, AppError> {
        let ctx = scope_context(self.db, Collection::Team, actor).await?;
        let existing = self.find_visible(id, &ctx.members).await?;
        ensure_editable(
            "team",
            existing.id,
            existing.visibility,
            existing.created_by,
            actor,
            &ctx.members,
        )?;
        require_privilege(params.visibility, actor.role)?;

        let (ctx, params) = self.prepare(ctx, params, Some(id)).await?;

        let team = TeamRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| ScopeError::NotFound(format!("Team {} not found", id)))?;

        Ok(editable(team, actor, &ctx.members))
    }

    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let ctx = scope_context(self.db, Collection::Team, actor).await?;
        let existing = self.find_visible(id, &ctx.members).await?;
        ensure_editable(
            "team",
            existing.id,
            existing.visibility,
            existing.created_by,
            actor,
            &ctx.members,
        )?;

        if !TeamRepository::new(self.db).soft_delete(id).await? {
            return Err(ScopeError::NotFound(format!("Team {} not found", id)).into());
        }

        tracing::info!("User {} deleted team {}", actor.user_id, id);

        Ok(())
    }

    /// Validates input, resolves the city and normalizes the name against collisions.
    async fn prepare(
        &self,
        ctx: ScopeContext,
        params: SaveTeamParams,
        exclude_id: Option<i32>,
    ) -> Result<(ScopeContext, SaveTeamParams), AppError> {
        let logo = validate::optional_url("Logo", params.logo)?;

        let city = visible_city(self.db, &ctx.members, params.city_id).await?;
        let ctx = ctx.with_secondary(city.id, city.name);

        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);
        let name = engine
            .resolve_name_collision(&params.name, &ctx, exclude_id)
            .await?
            .ensure_allowed()?;

        Ok((
            ctx,
            SaveTeamParams {
                name,
                logo,
                ..params
            },
        ))
    }

    async fn find_visible(&self, id: i32, members: &[i32]) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|team| is_visible(team.visibility, team.created_by, members))
            .ok_or_else(|| ScopeError::NotFound(format!("Team {} not found", id)).into())
    }
}

fn editable(team: Team, actor: &Actor, members: &[i32]) -> Editable<Team> {
    Editable {
        can_edit: can_edit(team.visibility, team.created_by, actor.role, members),
        item: team,
    }
}
