//! City data repository.

use chrono::Utc;
use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::access::Visibility,
    server::{
        data::fetch_page,
        model::{
            city::{City, SaveCityParams},
            page::{Page, PageRequest},
        },
    },
};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a city. `params.name` must already be normalized.
    pub async fn create(&self, params: SaveCityParams, created_by: i32) -> Result<City, DbErr> {
        let now = Utc::now();
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            created_by: ActiveValue::Set(Some(created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        City::from_entity(city)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        entity::prelude::City::find_by_id(id)
            .filter(entity::city::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .map(City::from_entity)
            .transpose()
    }

    /// Names of the given cities keyed by id, tombstoned cities included.
    pub async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cities = entity::prelude::City::find()
            .filter(entity::city::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(cities.into_iter().map(|c| (c.id, c.name)).collect())
    }

    /// Lists live cities the tenant may read, alphabetically.
    ///
    /// A city is readable when it is `system` or `shared`, or owned by one of `members`.
    pub async fn get_visible_paginated(
        &self,
        members: &[i32],
        request: PageRequest,
    ) -> Result<Page<City>, DbErr> {
        let select = entity::prelude::City::find()
            .filter(entity::city::Column::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(entity::city::Column::Visibility.is_in([
                        Visibility::System.as_str(),
                        Visibility::Shared.as_str(),
                    ]))
                    .add(entity::city::Column::CreatedBy.is_in(members.to_vec())),
            )
            .order_by_asc(entity::city::Column::Name);

        let (models, total) = fetch_page(self.db, select, request).await?;
        let cities = models
            .into_iter()
            .map(City::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(cities, total, request))
    }

    /// Updates name and visibility of a live city.
    ///
    /// # Returns
    /// - `Ok(Some(City))` - Updated city
    /// - `Ok(None)` - City not found or tombstoned
    pub async fn update(&self, id: i32, params: SaveCityParams) -> Result<Option<City>, DbErr> {
        let Some(city) = entity::prelude::City::find_by_id(id)
            .filter(entity::city::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::city::ActiveModel = city.into();
        active.name = ActiveValue::Set(params.name);
        active.visibility = ActiveValue::Set(params.visibility.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let city = active.update(self.db).await?;

        City::from_entity(city).map(Some)
    }

    /// Tombstones a city; returns whether a live row was affected.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::City::update_many()
            .filter(entity::city::Column::Id.eq(id))
            .filter(entity::city::Column::DeletedAt.is_null())
            .col_expr(
                entity::city::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
