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
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string(News::Title))
                    .col(text(News::Text))
                    .col(string(News::CoverName))
                    .col(string(News::CoverAddress))
                    .col(json(News::Photos))
                    .col(boolean(News::Pinned).default(false))
                    .col(integer(News::TeamId))
                    .col(integer(News::CreatedBy))
                    .col(timestamp_with_time_zone(News::CreatedAt))
                    .col(timestamp_with_time_zone(News::UpdatedAt))
                    .col(timestamp_with_time_zone_null(News::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_team_id")
                            .from(News::Table, News::TeamId)
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
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    Table,
    Id,
    Title,
    Text,
    CoverName,
    CoverAddress,
    Photos,
    Pinned,
    TeamId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
