//! User data repository.
//!
//! Users are only read here: accounts are provisioned by the external credential service,
//! which also writes the authenticated user id into the session.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::server::model::user::CurrentUser;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a live user by id.
    ///
    /// # Returns
    /// - `Ok(Some(CurrentUser))` - User exists and is not tombstoned
    /// - `Ok(None)` - No such user
    /// - `Err(DbErr)` - Query failed or the stored role is invalid
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CurrentUser>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .map(CurrentUser::from_entity)
            .transpose()
    }

    /// Ids of every user belonging to `team_id`, tombstoned users included.
    ///
    /// Records created by a since-deleted member still belong to the tenant.
    pub async fn member_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::TeamId.eq(team_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
