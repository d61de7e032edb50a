use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_user::User;

static IDX_FLIGHT_TIME_LEDGER_USER_ID_CATEGORY: &str = "idx-flight_time_ledger-user_id-category";
static IDX_FLIGHT_TIME_LEDGER_PIREP_ID: &str = "idx-flight_time_ledger-pirep_id";
static FK_FLIGHT_TIME_LEDGER_USER_ID: &str = "fk-flight_time_ledger-user_id";

/// Ledger rows are append-only; `pirep_id` is a weak reference with no foreign key so
/// compensating entries remain after the PIREP itself is deleted.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightTimeLedger::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightTimeLedger::Id))
                    .col(integer(FlightTimeLedger::UserId))
                    .col(integer(FlightTimeLedger::Minutes))
                    .col(string_len(FlightTimeLedger::Category, 16))
                    .col(string_len(FlightTimeLedger::SourceType, 32))
                    .col(integer_null(FlightTimeLedger::PirepId))
                    .col(string_null(FlightTimeLedger::Note))
                    .col(timestamp(FlightTimeLedger::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_TIME_LEDGER_USER_ID_CATEGORY)
                    .table(FlightTimeLedger::Table)
                    .col(FlightTimeLedger::UserId)
                    .col(FlightTimeLedger::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_TIME_LEDGER_PIREP_ID)
                    .table(FlightTimeLedger::Table)
                    .col(FlightTimeLedger::PirepId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FLIGHT_TIME_LEDGER_USER_ID)
                    .from_tbl(FlightTimeLedger::Table)
                    .from_col(FlightTimeLedger::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FLIGHT_TIME_LEDGER_USER_ID)
                    .table(FlightTimeLedger::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_TIME_LEDGER_PIREP_ID)
                    .table(FlightTimeLedger::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_TIME_LEDGER_USER_ID_CATEGORY)
                    .table(FlightTimeLedger::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightTimeLedger::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FlightTimeLedger {
    Table,
    Id,
    UserId,
    Minutes,
    Category,
    SourceType,
    PirepId,
    Note,
    CreatedAt,
}
