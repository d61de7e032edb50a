use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{TypeRatingAircraftModel, TypeRatingModel, UserTypeRatingModel},
    TestContext,
};

impl TestContext {
    pub fn type_rating<'a>(&'a self) -> TypeRatingFixtures<'a> {
        TypeRatingFixtures { test: self }
    }
}

pub struct TypeRatingFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> TypeRatingFixtures<'a> {
    pub async fn insert_type_rating(&self, name: &str) -> Result<TypeRatingModel, TestError> {
        Ok(
            entity::prelude::TypeRating::insert(entity::type_rating::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Add an aircraft to the set covered by a type rating.
    pub async fn assign_aircraft(
        &self,
        type_rating_id: i32,
        aircraft_id: i32,
    ) -> Result<TypeRatingAircraftModel, TestError> {
        Ok(entity::prelude::TypeRatingAircraft::insert(
            entity::type_rating_aircraft::ActiveModel {
                type_rating_id: ActiveValue::Set(type_rating_id),
                aircraft_id: ActiveValue::Set(aircraft_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Record that a pilot holds a type rating, bypassing the switch policy.
    pub async fn grant_to_user(
        &self,
        user_id: i32,
        type_rating_id: i32,
    ) -> Result<UserTypeRatingModel, TestError> {
        Ok(
            entity::prelude::UserTypeRating::insert(entity::user_type_rating::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                type_rating_id: ActiveValue::Set(type_rating_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
