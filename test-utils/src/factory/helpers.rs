//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a city, a team in that city and an `admin` member of the team.
///
/// # Returns
/// - `Ok((team, admin))` - The tenant and its administrator
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::team::Model, entity::user::Model), DbErr> {
    let city = crate::factory::city::create_city(db).await?;
    let team = crate::factory::team::create_team(db, city.id).await?;
    let admin = crate::factory::user::UserFactory::new(db)
        .role("admin")
        .team_id(Some(team.id))
        .build()
        .await?;

    Ok((team, admin))
}

/// Creates a team with a single member of the given role.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - `root`, `admin` or `user`
pub async fn create_team_with_member(
    db: &DatabaseConnection,
    role: &str,
) -> Result<(entity::team::Model, entity::user::Model), DbErr> {
    let city = crate::factory::city::create_city(db).await?;
    let team = crate::factory::team::create_team(db, city.id).await?;
    let member = crate::factory::user::UserFactory::new(db)
        .role(role)
        .team_id(Some(team.id))
        .build()
        .await?;

    Ok((team, member))
}
