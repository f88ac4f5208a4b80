use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Arena::Table)
                    .if_not_exists()
                    .col(pk_auto(Arena::Id))
                    .col(string(Arena::Name))
                    .col(integer(Arena::CityId))
                    .col(string(Arena::Visibility).default("personal"))
                    .col(integer_null(Arena::CreatedBy))
                    .col(timestamp_with_time_zone(Arena::CreatedAt))
                    .col(timestamp_with_time_zone(Arena::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Arena::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_arena_city_id")
                            .from(Arena::Table, Arena::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Arena::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Arena {
    Table,
    Id,
    Name,
    CityId,
    Visibility,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
