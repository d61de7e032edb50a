use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::AirlineModel, TestContext};

impl TestContext {
    pub fn airline<'a>(&'a self) -> AirlineFixtures<'a> {
        AirlineFixtures { test: self }
    }
}

pub struct AirlineFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> AirlineFixtures<'a> {
    /// Insert the airline settings row.
    pub async fn insert_airline(
        &self,
        enforce_type_ratings: bool,
        type_rating_change_divisor: f64,
    ) -> Result<AirlineModel, TestError> {
        Ok(
            entity::prelude::Airline::insert(entity::airline::ActiveModel {
                name: ActiveValue::Set("Test Virtual".to_string()),
                enforce_type_ratings: ActiveValue::Set(enforce_type_ratings),
                type_rating_change_divisor: ActiveValue::Set(type_rating_change_divisor),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
