pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_city_table;
mod m20250301_000002_create_team_table;
mod m20250301_000003_create_user_table;
mod m20250301_000004_create_arena_table;
mod m20250301_000005_create_player_table;
mod m20250302_000006_create_banner_table;
mod m20250302_000007_create_info_table;
mod m20250302_000008_create_album_table;
mod m20250302_000009_create_photo_table;
mod m20250303_000010_create_news_table;
mod m20250303_000011_create_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_city_table::Migration),
            Box::new(m20250301_000002_create_team_table::Migration),
            Box::new(m20250301_000003_create_user_table::Migration),
            Box::new(m20250301_000004_create_arena_table::Migration),
            Box::new(m20250301_000005_create_player_table::Migration),
            Box::new(m20250302_000006_create_banner_table::Migration),
            Box::new(m20250302_000007_create_info_table::Migration),
            Box::new(m20250302_000008_create_album_table::Migration),
            Box::new(m20250302_000009_create_photo_table::Migration),
            Box::new(m20250303_000010_create_news_table::Migration),
            Box::new(m20250303_000011_create_event_table::Migration),
        ]
    }
}
