use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string(City::Name))
                    .col(string(City::Visibility).default("personal"))
                    .col(integer_null(City::CreatedBy))
                    .col(timestamp_with_time_zone(City::CreatedAt))
                    .col(timestamp_with_time_zone(City::UpdatedAt))
                    .col(timestamp_with_time_zone_null(City::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_city_name")
                    .table(City::Table)
                    .col(City::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    Visibility,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
