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
                    .table(Album::Table)
                    .if_not_exists()
                    .col(pk_auto(Album::Id))
                    .col(string(Album::Name))
                    .col(integer(Album::TeamId))
                    .col(integer_null(Album::CreatedBy))
                    .col(boolean(Album::Locked).default(false))
                    .col(boolean(Album::Main).default(false))
                    .col(timestamp_with_time_zone(Album::CreatedAt))
                    .col(timestamp_with_time_zone(Album::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Album::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_team_id")
                            .from(Album::Table, Album::TeamId)
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
            .drop_table(Table::drop().table(Album::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Album {
    Table,
    Id,
    Name,
    TeamId,
    CreatedBy,
    Locked,
    Main,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
