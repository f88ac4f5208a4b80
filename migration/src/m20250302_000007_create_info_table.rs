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
                    .table(Info::Table)
                    .if_not_exists()
                    .col(pk_auto(Info::Id))
                    .col(string(Info::ShortTitle))
                    .col(string(Info::LongTitle))
                    .col(text(Info::Text))
                    .col(integer(Info::Position))
                    .col(boolean(Info::Locked).default(false))
                    .col(integer(Info::TeamId))
                    .col(integer_null(Info::CreatedBy))
                    .col(timestamp_with_time_zone(Info::CreatedAt))
                    .col(timestamp_with_time_zone(Info::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Info::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_info_team_id")
                            .from(Info::Table, Info::TeamId)
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
            .drop_table(Table::drop().table(Info::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Info {
    Table,
    Id,
    ShortTitle,
    LongTitle,
    Text,
    Position,
    Locked,
    TeamId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
