use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TypeRating::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeRating::Id))
                    .col(string_uniq(TypeRating::Name))
                    .col(timestamp(TypeRating::CreatedAt))
                    .col(timestamp(TypeRating::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TypeRating::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TypeRating {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
