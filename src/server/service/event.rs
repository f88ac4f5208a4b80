use sea_orm::DatabaseConnection;

use crate::{
    model::event::EventKind,
    server::{
        data::event::EventRepository,
        error::{scope::ScopeError, AppError},
        model::{
            event::{Event, SaveEventParams},
            page::{Page, PageRequest},
            user::Actor,
        },
        util::validate,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, actor: &Actor, params: SaveEventParams) -> Result<Event, AppError> {
        let params = validate_event(params)?;

        let event = EventRepository::new(self.db)
            .create(actor.team_id, actor.user_id, params)
            .await?;

        tracing::info!("User {} scheduled event {}", actor.user_id, event.id);

        Ok(event)
    }

    pub async fn get_by_id(&self, actor: &Actor, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(actor.team_id, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn get_paginated(
        &self,
        actor: &Actor,
        request: PageRequest,
    ) -> Result<Page<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_by_team_paginated(actor.team_id, request)
            .await?)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        params: SaveEventParams,
    ) -> Result<Event, AppError> {
        let params = validate_event(params)?;

        EventRepository::new(self.db)
            .update(actor.team_id, id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db)
            .soft_delete(actor.team_id, id)
            .await?
        {
            return Err(not_found(id));
        }

        Ok(())
    }
}

/// Games need both sides; scores are never negative.
fn validate_event(params: SaveEventParams) -> Result<SaveEventParams, ScopeError> {
    if params.kind == EventKind::Game
        && (params.home_team_id.is_none() || params.visitor_team_id.is_none())
    {
        return Err(ScopeError::Validation(
            "A game needs a home and a visitor team".to_string(),
        ));
    }
    if params.scores().any(|score| score < 0) {
        return Err(ScopeError::Validation(
            "Scores must not be negative".to_string(),
        ));
    }

    Ok(SaveEventParams {
        description: validate::optional_text(params.description),
        ..params
    })
}

fn not_found(id: i32) -> AppError {
    ScopeError::NotFound(format!("Event {} not found", id)).into()
}
