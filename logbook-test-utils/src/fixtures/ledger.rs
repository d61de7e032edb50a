use chrono::Utc;
use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::LedgerEntryModel, TestContext};

impl TestContext {
    pub fn ledger<'a>(&'a self) -> LedgerFixtures<'a> {
        LedgerFixtures { test: self }
    }
}

pub struct LedgerFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> LedgerFixtures<'a> {
    /// Append a raw ledger entry.
    pub async fn insert_entry(
        &self,
        user_id: i32,
        minutes: i32,
        category: FlightTimeCategory,
        source_type: FlightTimeSourceType,
        pirep_id: Option<i32>,
    ) -> Result<LedgerEntryModel, TestError> {
        Ok(
            entity::prelude::FlightTimeLedger::insert(entity::flight_time_ledger::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                minutes: ActiveValue::Set(minutes),
                category: ActiveValue::Set(category),
                source_type: ActiveValue::Set(source_type),
                pirep_id: ActiveValue::Set(pirep_id),
                note: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Seed career minutes with a manual entry.
    pub async fn insert_career_minutes(
        &self,
        user_id: i32,
        minutes: i32,
    ) -> Result<LedgerEntryModel, TestError> {
        self.insert_entry(
            user_id,
            minutes,
            FlightTimeCategory::Career,
            FlightTimeSourceType::Manual,
            None,
        )
        .await
    }
}
