use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::{
    db::{TypeRatingModel, UserTypeRatingModel},
    type_rating::HeldTypeRatings,
};

pub struct TypeRatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TypeRatingRepository<'a, C> {
    /// Creates a new instance of [`TypeRatingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, type_rating_id: i32) -> Result<Option<TypeRatingModel>, DbErr> {
        entity::prelude::TypeRating::find_by_id(type_rating_id)
            .one(self.db)
            .await
    }

    /// Type rating relations held by a user, oldest first.
    pub async fn get_user_relations(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserTypeRatingModel>, DbErr> {
        entity::prelude::UserTypeRating::find()
            .filter(entity::user_type_rating::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_type_rating::Column::Id)
            .all(self.db)
            .await
    }

    /// Ratings held by a user together with the union of aircraft they authorize.
    pub async fn get_held(&self, user_id: i32) -> Result<HeldTypeRatings, DbErr> {
        let type_rating_ids: Vec<i32> = self
            .get_user_relations(user_id)
            .await?
            .into_iter()
            .map(|relation| relation.type_rating_id)
            .collect();

        if type_rating_ids.is_empty() {
            return Ok(HeldTypeRatings::default());
        }

        let aircraft_ids = entity::prelude::TypeRatingAircraft::find()
            .filter(
                entity::type_rating_aircraft::Column::TypeRatingId
                    .is_in(type_rating_ids.iter().copied()),
            )
            .all(self.db)
            .await?
            .into_iter()
            .map(|assignment| assignment.aircraft_id)
            .collect::<HashSet<i32>>();

        Ok(HeldTypeRatings {
            type_rating_ids,
            aircraft_ids,
        })
    }

    pub async fn add_to_user(
        &self,
        user_id: i32,
        type_rating_id: i32,
    ) -> Result<UserTypeRatingModel, DbErr> {
        let relation = entity::user_type_rating::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            type_rating_id: ActiveValue::Set(type_rating_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        relation.insert(self.db).await
    }

    /// Remove one relation, returning the number of rows deleted.
    pub async fn remove_from_user(&self, user_id: i32, type_rating_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserTypeRating::delete_many()
            .filter(entity::user_type_rating::Column::UserId.eq(user_id))
            .filter(entity::user_type_rating::Column::TypeRatingId.eq(type_rating_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Remove every relation held by a user.
    pub async fn remove_all_from_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserTypeRating::delete_many()
            .filter(entity::user_type_rating::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
