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
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(integer(Banner::Position))
                    .col(string(Banner::Photo))
                    .col(string(Banner::Link))
                    .col(string_null(Banner::Text))
                    .col(integer(Banner::TeamId))
                    .col(integer_null(Banner::CreatedBy))
                    .col(timestamp_with_time_zone(Banner::CreatedAt))
                    .col(timestamp_with_time_zone(Banner::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Banner::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_banner_team_id")
                            .from(Banner::Table, Banner::TeamId)
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
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    Table,
    Id,
    Position,
    Photo,
    Link,
    Text,
    TeamId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
