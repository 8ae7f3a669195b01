use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Databases created by the legacy table script may already carry the column
        if manager.has_column("points", "registration_date").await? {
            return Ok(());
        }

        manager
            .alter_table(
                Table::alter()
                    .table(Points::Table)
                    .add_column(text_null(Points::RegistrationDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Points::Table)
                    .drop_column(Points::RegistrationDate)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Points {
    Table,
    RegistrationDate,
}
