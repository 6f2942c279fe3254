use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(ProProfile::Id))
                    .col(integer_null(ProProfile::UserId))
                    .col(string(ProProfile::Name))
                    .col(string(ProProfile::Specialty))
                    .col(text(ProProfile::Bio))
                    .col(string(ProProfile::ImageUrl))
                    .col(integer(ProProfile::YearsExperience))
                    .col(boolean(ProProfile::Published))
                    .col(timestamp_with_time_zone(ProProfile::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProProfile {
    Table,
    Id,
    UserId,
    Name,
    Specialty,
    Bio,
    ImageUrl,
    YearsExperience,
    Published,
    CreatedAt,
}
