//! Team data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::access::Visibility,
    server::{
        data::{city::CityRepository, fetch_page},
        model::{
            page::{Page, PageRequest},
            team::{SaveTeamParams, Team},
        },
    },
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a team. `params.name` must already be normalized.
    pub async fn create(&self, params: SaveTeamParams, created_by: i32) -> Result<Team, DbErr> {
        let now = Utc::now();
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            city_id: ActiveValue::Set(params.city_id),
            logo: ActiveValue::Set(params.logo),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_city_name(team).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(id)
            .filter(entity::team::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        match team {
            Some(team) => self.with_city_name(team).await.map(Some),
            None => Ok(None),
        }
    }

    /// Lists live teams the tenant may read, alphabetically, with their city names.
    pub async fn get_visible_paginated(
        &self,
        members: &[i32],
        request: PageRequest,
    ) -> Result<Page<Team>, DbErr> {
        let select = entity::prelude::Team::find()
            .filter(entity::team::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(entity::team::Column::Visibility.is_in([
                        Visibility::System.as_str(),
                        Visibility::Shared.as_str(),
                    ]))
                    .add(entity::team::Column::CreatedBy.is_in(members.to_vec())),
            )
            .order_by_asc(entity::team::Column::Name);

        let (models, total) = fetch_page(self.db, select, request).await?;

        let city_ids: Vec<i32> = models.iter().map(|t| t.city_id).collect();
        let city_names = CityRepository::new(self.db).names_by_ids(&city_ids).await?;

        let teams = models
            .into_iter()
            .map(|team| {
                let city_name = city_names.get(&team.city_id).cloned();
                Team::from_entity(team, city_name)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(teams, total, request))
    }

    pub async fn update(&self, id: i32, params: SaveTeamParams) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(id)
            .filter(entity::team::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = team.into();
        active.name = ActiveValue::Set(params.name);
        active.city_id = ActiveValue::Set(params.city_id);
        active.logo = ActiveValue::Set(params.logo);
        active.visibility = ActiveValue::Set(params.visibility.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let team = active.update(self.db).await?;

        self.with_city_name(team).await.map(Some)
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::update_many()
            .filter(entity::team::Column::Id.eq(id))
            .filter(entity::team::Column::DeletedAt.is_null())
            .col_expr(
                entity::team::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_city_name(&self, team: entity::team::Model) -> Result<Team, DbErr> {
        let city_name = CityRepository::new(self.db)
            .names_by_ids(&[team.city_id])
            .await?
            .remove(&team.city_id);

        Team::from_entity(team, city_name)
    }
}
