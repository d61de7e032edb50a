use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(pk_auto(Airline::Id))
                    .col(string(Airline::Name))
                    .col(boolean(Airline::EnforceTypeRatings).default(false))
                    .col(double(Airline::TypeRatingChangeDivisor).default(1.0))
                    .col(timestamp(Airline::CreatedAt))
                    .col(timestamp(Airline::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airline::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Airline {
    Table,
    Id,
    Name,
    EnforceTypeRatings,
    TypeRatingChangeDivisor,
    CreatedAt,
    UpdatedAt,
}
