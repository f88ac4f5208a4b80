use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_team_table::Team, m20250302_000008_create_album_table::Album,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_auto(Photo::Id))
                    .col(integer(Photo::AlbumId))
                    .col(string_null(Photo::Name))
                    .col(string(Photo::Address))
                    .col(integer(Photo::Position).default(0))
                    .col(integer(Photo::TeamId))
                    .col(integer_null(Photo::CreatedBy))
                    .col(timestamp_with_time_zone(Photo::CreatedAt))
                    .col(timestamp_with_time_zone(Photo::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Photo::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_album_id")
                            .from(Photo::Table, Photo::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_team_id")
                            .from(Photo::Table, Photo::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_photo_album_position")
                    .table(Photo::Table)
                    .col(Photo::AlbumId)
                    .col(Photo::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photo {
    Table,
    Id,
    AlbumId,
    Name,
    Address,
    Position,
    TeamId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
