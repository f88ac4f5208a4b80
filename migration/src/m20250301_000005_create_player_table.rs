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
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(integer(Player::Number))
                    .col(string(Player::Position))
                    .col(string(Player::Hand).default("right"))
                    .col(date_null(Player::BirthDate))
                    .col(integer_null(Player::Height))
                    .col(integer_null(Player::Weight))
                    .col(string_null(Player::Photo))
                    .col(text_null(Player::Description))
                    .col(boolean(Player::Hidden).default(false))
                    .col(integer(Player::TeamId))
                    .col(timestamp_with_time_zone(Player::CreatedAt))
                    .col(timestamp_with_time_zone(Player::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Player::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
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
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    FirstName,
    LastName,
    Number,
    Position,
    Hand,
    BirthDate,
    Height,
    Weight,
    Photo,
    Description,
    Hidden,
    TeamId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
