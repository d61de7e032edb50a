use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000001_user::User, m20261017_000002_aircraft::Aircraft};

static IDX_PIREP_USER_ID: &str = "idx-pirep-user_id";
static IDX_PIREP_STATUS: &str = "idx-pirep-status";
static FK_PIREP_USER_ID: &str = "fk-pirep-user_id";
static FK_PIREP_AIRCRAFT_ID: &str = "fk-pirep-aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pirep::Table)
                    .if_not_exists()
                    .col(pk_auto(Pirep::Id))
                    .col(integer(Pirep::UserId))
                    .col(integer_null(Pirep::AircraftId))
                    .col(integer(Pirep::FlightTime))
                    .col(string_len(Pirep::Status, 16).default("pending"))
                    .col(string_null(Pirep::DeniedReason))
                    .col(timestamp(Pirep::CreatedAt))
                    .col(timestamp(Pirep::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PIREP_USER_ID)
                    .table(Pirep::Table)
                    .col(Pirep::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PIREP_STATUS)
                    .table(Pirep::Table)
                    .col(Pirep::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PIREP_USER_ID)
                    .from_tbl(Pirep::Table)
                    .from_col(Pirep::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PIREP_AIRCRAFT_ID)
                    .from_tbl(Pirep::Table)
                    .from_col(Pirep::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PIREP_AIRCRAFT_ID)
                    .table(Pirep::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PIREP_USER_ID)
                    .table(Pirep::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PIREP_STATUS)
                    .table(Pirep::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PIREP_USER_ID)
                    .table(Pirep::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pirep::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Pirep {
    Table,
    Id,
    UserId,
    AircraftId,
    FlightTime,
    Status,
    DeniedReason,
    CreatedAt,
    UpdatedAt,
}
