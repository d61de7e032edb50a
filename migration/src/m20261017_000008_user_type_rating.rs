use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000001_user::User, m20261017_000006_type_rating::TypeRating};

static IDX_USER_TYPE_RATING_USER_ID_TYPE_RATING_ID: &str =
    "idx-user_type_rating-user_id-type_rating_id";
static FK_USER_TYPE_RATING_TYPE_RATING_ID: &str = "fk-user_type_rating-type_rating_id";
static FK_USER_TYPE_RATING_USER_ID: &str = "fk-user_type_rating-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserTypeRating::Table)
                    .if_not_exists()
                    .col(pk_auto(UserTypeRating::Id))
                    .col(integer(UserTypeRating::UserId))
                    .col(integer(UserTypeRating::TypeRatingId))
                    .col(timestamp(UserTypeRating::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_TYPE_RATING_USER_ID_TYPE_RATING_ID)
                    .table(UserTypeRating::Table)
                    .col(UserTypeRating::UserId)
                    .col(UserTypeRating::TypeRatingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_TYPE_RATING_TYPE_RATING_ID)
                    .from_tbl(UserTypeRating::Table)
                    .from_col(UserTypeRating::TypeRatingId)
                    .to_tbl(TypeRating::Table)
                    .to_col(TypeRating::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_TYPE_RATING_USER_ID)
                    .from_tbl(UserTypeRating::Table)
                    .from_col(UserTypeRating::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
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
                    .name(FK_USER_TYPE_RATING_USER_ID)
                    .table(UserTypeRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_TYPE_RATING_TYPE_RATING_ID)
                    .table(UserTypeRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_TYPE_RATING_USER_ID_TYPE_RATING_ID)
                    .table(UserTypeRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserTypeRating::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserTypeRating {
    Table,
    Id,
    UserId,
    TypeRatingId,
    CreatedAt,
}
