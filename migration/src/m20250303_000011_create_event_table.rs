use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Kind))
                    .col(timestamp_with_time_zone(Event::Date))
                    .col(integer_null(Event::ArenaId))
                    .col(integer_null(Event::CityId))
                    .col(text_null(Event::Description))
                    .col(integer_null(Event::HomeTeamId))
                    .col(integer_null(Event::VisitorTeamId))
                    .col(integer_null(Event::FirstPeriodHome))
                    .col(integer_null(Event::FirstPeriodVisitor))
                    .col(integer_null(Event::SecondPeriodHome))
                    .col(integer_null(Event::SecondPeriodVisitor))
                    .col(integer_null(Event::ThirdPeriodHome))
                    .col(integer_null(Event::ThirdPeriodVisitor))
                    .col(integer_null(Event::FinalHome))
                    .col(integer_null(Event::FinalVisitor))
                    .col(string_null(Event::Overtime))
                    .col(integer(Event::TeamId))
                    .col(integer_null(Event::CreatedBy))
                    .col(timestamp_with_time_zone(Event::CreatedAt))
                    .col(timestamp_with_time_zone(Event::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Event::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_id")
                            .from(Event::Table, Event::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Kind,
    Date,
    ArenaId,
    CityId,
    Description,
    HomeTeamId,
    VisitorTeamId,
    FirstPeriodHome,
    FirstPeriodVisitor,
    SecondPeriodHome,
    SecondPeriodVisitor,
    ThirdPeriodHome,
    ThirdPeriodVisitor,
    FinalHome,
    FinalVisitor,
    Overtime,
    TeamId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
