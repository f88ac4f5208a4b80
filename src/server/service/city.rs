use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, scoped::SeaOrmScopedStore},
    engine::{require_privilege, Collection, EnginePolicy, ScopeEngine},
    error::{scope::ScopeError, AppError},
    model::{
        city::{can_edit, City, SaveCityParams},
        page::{Page, PageRequest},
        user::Actor,
        Editable,
    },
    service::{ensure_editable, scope_context, visible_city},
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
    policy: EnginePolicy,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: EnginePolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a city after the privilege gate and the collision check.
    ///
    /// # Returns
    /// - `Ok(Editable<City>)` - Created city with its normalized name
    /// - `Err(ScopeError::Privilege)` - Non-root caller requested `system` visibility
    /// - `Err(ScopeError::Conflict)` - Name taken by a system city or one of the tenant's
    pub async fn create(
        &self,
        actor: &Actor,
        params: SaveCityParams,
    ) -> Result<Editable<City>, AppError> {
        require_privilege(params.visibility, actor.role)?;

        let ctx = scope_context(self.db, Collection::City, actor).await?;
        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);

        let name = engine
            .resolve_name_collision(&params.name, &ctx, None)
            .await?
            .ensure_allowed()?;

        let city = CityRepository::new(self.db)
            .create(SaveCityParams { name, ..params }, actor.user_id)
            .await?;

        tracing::info!("User {} created city {} ({})", actor.user_id, city.id, city.name);

        let can_edit = can_edit(city.visibility, city.created_by, actor.role, &ctx.members);
        Ok(Editable {
            item: city,
            can_edit,
        })
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<Editable<City>, AppError> {
        let ctx = scope_context(self.db, Collection::City, actor).await?;
        let city = visible_city(self.db, &ctx.members, id).await?;

        let can_edit = can_edit(city.visibility, city.created_by, actor.role, &ctx.members);
        Ok(Editable {
            item: city,
            can_edit,
        })
    }

    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<Editable<City>>, AppError> {
        let ctx = scope_context(self.db, Collection::City, actor).await?;
        let page = CityRepository::new(self.db)
            .get_visible_paginated(&ctx.members, request)
            .await?;

        Ok(page.map(|city| Editable {
            can_edit: can_edit(city.visibility, city.created_by, actor.role, &ctx.members),
            item: city,
        }))
    }

    /// Renames a city or changes its visibility.
    ///
    /// # Returns
    /// - `Ok(Editable<City>)` - Updated city
    /// - `Err(ScopeError::NotFound)` - City not visible to the tenant
    /// - `Err(ScopeError::Privilege)` - City not editable by the caller, or `system` requested
    ///   by a non-root caller
    /// - `Err(ScopeError::Conflict)` - New name collides
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveCityParams,
    ) -> Result<Editable<City>, AppError> {
        let ctx = scope_context(self.db, Collection::City, actor).await?;
        let existing = visible_city(self.db, &ctx.members, id).await?;
        ensure_editable(
            "city",
            existing.id,
            existing.visibility,
            existing.created_by,
            actor,
            &ctx.members,
        )?;
        require_privilege(params.visibility, actor.role)?;

        let store = SeaOrmScopedStore::new(self.db);
        let engine = ScopeEngine::new(&store, self.policy);
        let name = engine
            .resolve_name_collision(&params.name, &ctx, Some(id))
            .await?
            .ensure_allowed()?;

        let city = CityRepository::new(self.db)
            .update(id, SaveCityParams { name, ..params })
            .await?
            .ok_or_else(|| ScopeError::NotFound(format!("City {} not found", id)))?;

        let can_edit = can_edit(city.visibility, city.created_by, actor.role, &ctx.members);
        Ok(Editable {
            item: city,
            can_edit,
        })
    }

    /// Tombstones a city the caller may edit.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        let ctx = scope_context(self.db, Collection::City, actor).await?;
        let existing = visible_city(self.db, &ctx.members, id).await?;
        ensure_editable(
            "city",
            existing.id,
            existing.visibility,
            existing.created_by,
            actor,
            &ctx.members,
        )?;

        if !CityRepository::new(self.db).soft_delete(id).await? {
            return Err(ScopeError::NotFound(format!("City {} not found", id)).into());
        }

        tracing::info!("User {} deleted city {}", actor.user_id, id);

        Ok(())
    }
}
