use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::AircraftModel, TestContext};

impl TestContext {
    pub fn fleet<'a>(&'a self) -> FleetFixtures<'a> {
        FleetFixtures { test: self }
    }
}

pub struct FleetFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> FleetFixtures<'a> {
    /// Insert an aircraft with a house livery.
    pub async fn insert_aircraft(&self, name: &str) -> Result<AircraftModel, TestError> {
        Ok(
            entity::prelude::Aircraft::insert(entity::aircraft::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                livery: ActiveValue::Set("House".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
