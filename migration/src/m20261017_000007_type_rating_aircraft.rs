use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000002_aircraft::Aircraft, m20261017_000006_type_rating::TypeRating};

static IDX_TYPE_RATING_AIRCRAFT_TYPE_RATING_ID_AIRCRAFT_ID: &str =
    "idx-type_rating_aircraft-type_rating_id-aircraft_id";
static FK_TYPE_RATING_AIRCRAFT_TYPE_RATING_ID: &str = "fk-type_rating_aircraft-type_rating_id";
static FK_TYPE_RATING_AIRCRAFT_AIRCRAFT_ID: &str = "fk-type_rating_aircraft-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TypeRatingAircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeRatingAircraft::Id))
                    .col(integer(TypeRatingAircraft::TypeRatingId))
                    .col(integer(TypeRatingAircraft::AircraftId))
                    .col(timestamp(TypeRatingAircraft::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TYPE_RATING_AIRCRAFT_TYPE_RATING_ID_AIRCRAFT_ID)
                    .table(TypeRatingAircraft::Table)
                    .col(TypeRatingAircraft::TypeRatingId)
                    .col(TypeRatingAircraft::AircraftId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TYPE_RATING_AIRCRAFT_TYPE_RATING_ID)
                    .from_tbl(TypeRatingAircraft::Table)
                    .from_col(TypeRatingAircraft::TypeRatingId)
                    .to_tbl(TypeRating::Table)
                    .to_col(TypeRating::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TYPE_RATING_AIRCRAFT_AIRCRAFT_ID)
                    .from_tbl(TypeRatingAircraft::Table)
                    .from_col(TypeRatingAircraft::AircraftId)
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
                    .name(FK_TYPE_RATING_AIRCRAFT_AIRCRAFT_ID)
                    .table(TypeRatingAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TYPE_RATING_AIRCRAFT_TYPE_RATING_ID)
                    .table(TypeRatingAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TYPE_RATING_AIRCRAFT_TYPE_RATING_ID_AIRCRAFT_ID)
                    .table(TypeRatingAircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TypeRatingAircraft::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TypeRatingAircraft {
    Table,
    Id,
    TypeRatingId,
    AircraftId,
    CreatedAt,
}
