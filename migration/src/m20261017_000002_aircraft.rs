use sea_orm_migration::{prelude::*, schema::*};

static IDX_AIRCRAFT_NAME: &str = "idx-aircraft-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(Aircraft::Id))
                    .col(string(Aircraft::Name))
                    .col(string(Aircraft::Livery))
                    .col(timestamp(Aircraft::CreatedAt))
                    .col(timestamp(Aircraft::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_NAME)
                    .table(Aircraft::Table)
                    .col(Aircraft::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_NAME)
                    .table(Aircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    Name,
    Livery,
    CreatedAt,
    UpdatedAt,
}
