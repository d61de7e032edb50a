use chrono::Utc;
use entity::sea_orm_active_enums::PirepStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PirepModel, TestContext};

impl TestContext {
    pub fn pirep<'a>(&'a self) -> PirepFixtures<'a> {
        PirepFixtures { test: self }
    }
}

pub struct PirepFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> PirepFixtures<'a> {
    /// Insert a PIREP directly in the given status.
    ///
    /// No ledger entries are written, so an `Approved` fixture is only consistent with the
    /// ledger if the test also inserts the matching entry.
    pub async fn insert_pirep(
        &self,
        user_id: i32,
        aircraft_id: Option<i32>,
        flight_time: i32,
        status: PirepStatus,
    ) -> Result<PirepModel, TestError> {
        Ok(
            entity::prelude::Pirep::insert(entity::pirep::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                aircraft_id: ActiveValue::Set(aircraft_id),
                flight_time: ActiveValue::Set(flight_time),
                status: ActiveValue::Set(status),
                denied_reason: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a pending PIREP.
    pub async fn insert_pending_pirep(
        &self,
        user_id: i32,
        aircraft_id: Option<i32>,
        flight_time: i32,
    ) -> Result<PirepModel, TestError> {
        self.insert_pirep(user_id, aircraft_id, flight_time, PirepStatus::Pending)
            .await
    }
}
