use sea_orm_migration::{prelude::*, schema::*};

static IDX_RANK_MINIMUM_FLIGHT_TIME: &str = "idx-rank-minimum_flight_time";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rank::Table)
                    .if_not_exists()
                    .col(pk_auto(Rank::Id))
                    .col(string(Rank::Name))
                    .col(integer(Rank::MinimumFlightTime))
                    .col(integer_null(Rank::MaximumFlightTime))
                    .col(boolean(Rank::AllowAllAircraft).default(false))
                    .col(timestamp(Rank::CreatedAt))
                    .col(timestamp(Rank::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RANK_MINIMUM_FLIGHT_TIME)
                    .table(Rank::Table)
                    .col(Rank::MinimumFlightTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RANK_MINIMUM_FLIGHT_TIME)
                    .table(Rank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rank::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Rank {
    Table,
    Id,
    Name,
    MinimumFlightTime,
    MaximumFlightTime,
    AllowAllAircraft,
    CreatedAt,
    UpdatedAt,
}
