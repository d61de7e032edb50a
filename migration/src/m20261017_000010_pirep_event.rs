use sea_orm_migration::{prelude::*, schema::*};

static IDX_PIREP_EVENT_PIREP_ID: &str = "idx-pirep_event-pirep_id";

/// Audit rows keep a plain `pirep_id` so the trail outlives a deleted PIREP.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PirepEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(PirepEvent::Id))
                    .col(integer(PirepEvent::PirepId))
                    .col(string_len(PirepEvent::Action, 16))
                    .col(integer(PirepEvent::PerformedBy))
                    .col(string_null(PirepEvent::Reason))
                    .col(text_null(PirepEvent::PreviousValues))
                    .col(text_null(PirepEvent::NewValues))
                    .col(timestamp(PirepEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PIREP_EVENT_PIREP_ID)
                    .table(PirepEvent::Table)
                    .col(PirepEvent::PirepId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PIREP_EVENT_PIREP_ID)
                    .table(PirepEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PirepEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PirepEvent {
    Table,
    Id,
    PirepId,
    Action,
    PerformedBy,
    Reason,
    PreviousValues,
    NewValues,
    CreatedAt,
}
