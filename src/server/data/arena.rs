//! Arena data repository.

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
            arena::{Arena, SaveArenaParams},
        },
    },
};

pub struct ArenaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArenaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an arena. `params.name` must already be normalized.
    pub async fn create(&self, params: SaveArenaParams, created_by: i32) -> Result<Arena, DbErr> {
        let now = Utc::now();
        let arena = entity::arena::ActiveModel {
            name: ActiveValue::Set(params.name),
            city_id: ActiveValue::Set(params.city_id),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_city_name(arena).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Arena>, DbErr> {
        let arena = entity::prelude::Arena::find_by_id(id)
            .filter(entity::arena::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        match arena {
            Some(arena) => self.with_city_name(arena).await.map(Some),
            None => Ok(None),
        }
    }

    /// Lists live arenas the tenant may read, alphabetically, with their city names.
    pub async fn get_visible_paginated(
        &self,
        members: &[i32],
        request: PageRequest,
    ) -> Result<Page<Arena>, DbErr> {
        let select = entity::prelude::Arena::find()
            .filter(entity::arena::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(entity::arena::Column::Visibility.is_in([
                        Visibility::System.as_str(),
                        Visibility::Shared.as_str(),
                    ]))
                    .add(entity::arena::Column::CreatedBy.is_in(members.to_vec())),
            )
            .order_by_asc(entity::arena::Column::Name);

        let (models, total) = fetch_page(self.db, select, request).await?;

        let city_ids: Vec<i32> = models.iter().map(|a| a.city_id).collect();
        let city_names = CityRepository::new(self.db).names_by_ids(&city_ids).await?;

        let arenas = models
            .into_iter()
            .map(|arena| {
                let city_name = city_names.get(&arena.city_id).cloned();
                Arena::from_entity(arena, city_name)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(arenas, total, request))
    }

    pub async fn update(&self, id: i32, params: SaveArenaParams) -> Result<Option<Arena>, DbErr> {
        let Some(arena) = entity::prelude::Arena::find_by_id(id)
            .filter(entity::arena::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::arena::ActiveModel = arena.into();
        active.name = ActiveValue::Set(params.name);
        active.city_id = ActiveValue::Set(params.city_id);
        active.visibility = ActiveValue::Set(params.visibility.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let arena = active.update(self.db).await?;

        self.with_city_name(arena).await.map(Some)
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Arena::update_many()
            .filter(entity::arena::Column::Id.eq(id))
            .filter(entity::arena::Column::DeletedAt.is_null())
            .col_expr(
                entity::arena::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_city_name(&self, arena: entity::arena::Model) -> Result<Arena, DbErr> {
        let city_name = CityRepository::new(self.db)
            .names_by_ids(&[arena.city_id])
            .await?
            .remove(&arena.city_id);

        Arena::from_entity(arena, city_name)
    }
}
