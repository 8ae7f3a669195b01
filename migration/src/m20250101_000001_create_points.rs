use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // First schema version: no registration date yet
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(pk_auto(Points::Id))
                    .col(integer(Points::Category).not_null())
                    .col(text(Points::Name).not_null())
                    .col(text_null(Points::ClassificationCode))
                    .col(double(Points::Latitude).not_null())
                    .col(double(Points::Longitude).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_category")
                    .table(Points::Table)
                    .col(Points::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Points {
    Table,
    Id,
    Category,
    Name,
    ClassificationCode,
    Latitude,
    Longitude,
}
