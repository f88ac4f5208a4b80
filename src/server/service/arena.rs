use sea_orm::DatabaseConnection;

use crate::server::{
    data::{arena::ArenaRepository, scoped::SeaOrmScopedStore},
    engine::{require_privilege, Collection, EnginePolicy, ScopeContext, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        city::{can_edit, is_visible},
        page::{Page, PageRequest},
        arena::{Arena, SaveArenaParams},
        user::Actor,
        Editable,
    },
    service::{ensure_editable, scope_context, visible_city},
    util::validate,
};

pub struct ArenaService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> ArenaService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Creates an arena in a city visible to the tenant.
    ///
    /// Arena names are checked across every city, so the city only has to be visible.
    ///
    /// # Returns
    /// - `Ok(Editable<Arena>)` - Created arena
    /// - `Err(ScopeError::Privilege)` - Non-root caller requested `system` visibility
    /// - `Err(ScopeError::NotFound)` - City not visible to the tenant
    /// - `Err(ScopeError::Validation)` - Name shorter than 2 characters
    /// - `Err(ScopeError::Conflict)` - Name taken by a system arena or one of the tenant's
    pub async fn create(
        &self,
        actor: &Actor,
        params: SaveArenaParams,
    ) -> Result<Editable<Arena>, AppError> {
        require_privilege(params.visibility, actor.role)?;

        let ctx = scope_context(self.db, Collection::Arena, actor).await?;
        let (ctx, params) = self.prepare(ctx, params, None).await?;

        let arena = ArenaRepository::new(self.db)
            .create(params, actor.user_id)
            .await?;

        tracing::info!("User {} created arena {} ({})", actor.user_id, arena.id, arena.name);

        Ok(editable(arena, actor, &ctx.members))
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<Editable<Arena>, AppError> {
        let ctx = scope_context(self.db, Collection::Arena, actor).await?;
        let arena = self.find_visible(id, &ctx.members).await?;

        Ok(editable(arena, actor, &ctx.members))
    }

    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<Editable<Arena>>, AppError> {
        let ctx = scope_context(self.db, Collection::Arena, actor).await?;
        let page = ArenaRepository::new(self.db)
            .get_visible_paginated(&ctx.members, request)
            .await?;

        Ok(page.map(|arena| editable(arena, actor, &ctx.members)))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveArenaParams,
    ) -> Result<Editable<Arena>, AppError> {
        let ctx = scope_context(self.db, Collection::Arena, actor).await?;
        let existing = self.find_visible(id, &ctx.members).await?;
        ensure_editable(
            "arena",
            existing.id,
            existing.visibility,
            existing.created_by,
            actor,
            &ctx.members,
        )?;
        require_privilege(params.visibility, actor.role)?;

        let (ctx, params) = self.prepare(ctx, params, Some(id)).await?;

        let arena = ArenaRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| ScopeError::NotFound(format!("Arena {} not found", id)))?;

        Ok(editable(arena, actor, &ctx.members))
    }

    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let ctx = scope_context(self.db, Collection::Arena, actor).await?;
        let existing = self.find_visible(id, &ctx.members).await?;
        ensure_editable(
            "arena",
            existing.id,
            existing.visibility,
            existing.created_by,
            actor,
            &ctx.members,
        )?;

        if !ArenaRepository::new(self.db).soft_delete(id).await? {
            return Err(ScopeError::NotFound(format!("Arena {} not found", id)).into());
        }

        tracing::info!("User {} deleted arena {}", actor.user_id, id);

        Ok(())
    }

    /// Validates input, resolves the city and normalizes the name against collisions.
    async fn prepare(
        &self,
        ctx: ScopeContext,
        params: SaveArenaParams,
        exclude_id: Option<i32>,
    ) -> Result<(ScopeContext, SaveArenaParams), AppError> {
        validate::require_min_chars("Arena name", &params.name, 2)?;

        visible_city(self.db, &ctx.members, params.city_id).await?;

        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);
        let name = engine
            .resolve_name_collision(&params.name, &ctx, exclude_id)
            .await?
            .ensure_allowed()?;

        Ok((
            ctx,
            SaveArenaParams { name, ..params },
        ))
    }

    async fn find_visible(&self, id: i32, members: &[i32]) -> Result<Arena, AppError> {
        ArenaRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|arena| is_visible(arena.visibility, arena.created_by, members))
            .ok_or_else(|| ScopeError::NotFound(format!("Arena {} not found", id)).into())
    }
}

fn editable(arena: Arena, actor: &Actor, members: &[i32]) -> Editable<Arena> {
    Editable {
        can_edit: can_edit(arena.visibility, arena.created_by, actor.role, members),
        item: arena,
    }
}
