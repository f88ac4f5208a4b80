use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::access::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::{Actor, CurrentUser},
    },
};

/// Requirement checked against the session user.
pub enum Permission {
    /// Role `admin` or `root`; needed to write tenant content.
    Manage,
    /// Role `root`.
    Root,
    /// Membership of a team; needed by every tenant-scoped route.
    Team,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - User is logged in, live and satisfies every permission
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session names an unknown or deleted user
    /// - `Err(AuthError::AccessDenied)` - Role too low for a permission
    /// - `Err(AuthError::NoTeam)` - `Permission::Team` required and user has no team
    pub async fn require(&self, permissions: &[Permission]) -> Result<CurrentUser, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Manage => {
                    if !user.role.can_manage() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("role {} cannot manage team content", user.role.as_str()),
                        )
                        .into());
                    }
                }
                Permission::Root => {
                    if user.role != Role::Root {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "root role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Team => {
                    if user.team_id.is_none() {
                        return Err(AuthError::NoTeam(user_id).into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Shorthand for tenant-scoped routes: requires a team, plus `Manage` when writing.
    pub async fn require_actor(&self, write: bool) -> Result<Actor, AppError> {
        let user = if write {
            self.require(&[Permission::Team, Permission::Manage]).await?
        } else {
            self.require(&[Permission::Team]).await?
        };

        Ok(user.actor()?)
    }
}
