use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{RankAircraftModel, RankModel},
    TestContext,
};

impl TestContext {
    pub fn rank<'a>(&'a self) -> RankFixtures<'a> {
        RankFixtures { test: self }
    }
}

pub struct RankFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> RankFixtures<'a> {
    /// Insert a rank covering `minimum_flight_time..=maximum_flight_time` career minutes.
    pub async fn insert_rank(
        &self,
        name: &str,
        minimum_flight_time: i32,
        maximum_flight_time: Option<i32>,
        allow_all_aircraft: bool,
    ) -> Result<RankModel, TestError> {
        Ok(
            entity::prelude::Rank::insert(entity::rank::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                minimum_flight_time: ActiveValue::Set(minimum_flight_time),
                maximum_flight_time: ActiveValue::Set(maximum_flight_time),
                allow_all_aircraft: ActiveValue::Set(allow_all_aircraft),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Make an aircraft directly available to a rank.
    pub async fn assign_aircraft(
        &self,
        rank_id: i32,
        aircraft_id: i32,
    ) -> Result<RankAircraftModel, TestError> {
        Ok(
            entity::prelude::RankAircraft::insert(entity::rank_aircraft::ActiveModel {
                rank_id: ActiveValue::Set(rank_id),
                aircraft_id: ActiveValue::Set(aircraft_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
