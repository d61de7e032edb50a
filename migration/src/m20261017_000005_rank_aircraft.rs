use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000002_aircraft::Aircraft, m20261017_000004_rank::Rank};

static IDX_RANK_AIRCRAFT_RANK_ID_AIRCRAFT_ID: &str = "idx-rank_aircraft-rank_id-aircraft_id";
static FK_RANK_AIRCRAFT_RANK_ID: &str = "fk-rank_aircraft-rank_id";
static FK_RANK_AIRCRAFT_AIRCRAFT_ID: &str = "fk-rank_aircraft-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankAircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(RankAircraft::Id))
                    .col(integer(RankAircraft::RankId))
                    .col(integer(RankAircraft::AircraftId))
                    .col(timestamp(RankAircraft::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RANK_AIRCRAFT_RANK_ID_AIRCRAFT_ID)
                    .table(RankAircraft::Table)
                    .col(RankAircraft::RankId)
                    .col(RankAircraft::AircraftId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RANK_AIRCRAFT_RANK_ID)
                    .from_tbl(RankAircraft::Table)
                    .from_col(RankAircraft::RankId)
                    .to_tbl(Rank::Table)
                    .to_col(Rank::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RANK_AIRCRAFT_AIRCRAFT_ID)
                    .from_tbl(RankAircraft::Table)
                    .from_col(RankAircraft::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RANK_AIRCRAFT_AIRCRAFT_ID)
                    .table(RankAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RANK_AIRCRAFT_RANK_ID)
                    .table(RankAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RANK_AIRCRAFT_RANK_ID_AIRCRAFT_ID)
                    .table(RankAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RankAircraft::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RankAircraft {
    Table,
    Id,
    RankId,
    AircraftId,
    CreatedAt,
}
