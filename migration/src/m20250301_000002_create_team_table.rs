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
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::Name))
                    .col(integer(Team::CityId))
                    .col(string_null(Team::Logo))
                    .col(string(Team::Visibility).default("personal"))
                    .col(integer_null(Team::CreatedBy))
                    .col(timestamp_with_time_zone(Team::CreatedAt))
                    .col(timestamp_with_time_zone(Team::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Team::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_city_id")
                            .from(Team::Table, Team::CityId)
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
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    CityId,
    Logo,
    Visibility,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
