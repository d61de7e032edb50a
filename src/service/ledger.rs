//! Flight time ledger service.
//!
//! Appends signed minute entries and computes per-user aggregates. Totals are always summed
//! from the ledger at read time; nothing is cached.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::FlightTimeCategory;
use sea_orm::ConnectionTrait;

use crate::{
    data::ledger::LedgerRepository,
    error::{ledger::LedgerError, Error},
    model::{db::LedgerEntryModel, ledger::NewLedgerEntry},
};

/// Ledger operations over any connection, so they can join a caller's transaction.
pub struct LedgerService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LedgerService<'a, C> {
    /// Creates a new instance of [`LedgerService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Append one immutable entry.
    ///
    /// # Returns
    /// - `Ok(LedgerEntryModel)` - Stored entry with its generated id and timestamp
    /// - `Err(Error::LedgerError)` - `minutes` was zero
    /// - `Err(Error::DbErr)` - Insert failed (e.g. unknown user)
    pub async fn append(&self, entry: NewLedgerEntry) -> Result<LedgerEntryModel, Error> {
        if entry.minutes == 0 {
            return Err(LedgerError::ZeroMinutes(entry.user_id).into());
        }

        let entry = LedgerRepository::new(self.db).append(entry).await?;

        tracing::debug!(
            user_id = %entry.user_id,
            pirep_id = ?entry.pirep_id,
            minutes = %entry.minutes,
            category = ?entry.category,
            source_type = ?entry.source_type,
            "Appended flight time ledger entry"
        );

        Ok(entry)
    }

    /// Total signed minutes for a user, optionally for one category. Zero when no entries exist.
    pub async fn sum_minutes(
        &self,
        user_id: i32,
        category: Option<FlightTimeCategory>,
    ) -> Result<i64, Error> {
        Ok(LedgerRepository::new(self.db)
            .sum_minutes(user_id, category)
            .await?)
    }

    pub async fn career_minutes(&self, user_id: i32) -> Result<i64, Error> {
        self.sum_minutes(user_id, Some(FlightTimeCategory::Career))
            .await
    }

    pub async fn free_fly_minutes(&self, user_id: i32) -> Result<i64, Error> {
        self.sum_minutes(user_id, Some(FlightTimeCategory::FreeFly))
            .await
    }

    pub async fn total_minutes(&self, user_id: i32) -> Result<i64, Error> {
        self.sum_minutes(user_id, None).await
    }

    /// Every entry for a user in creation order; replaying it reproduces all totals.
    pub async fn history(&self, user_id: i32) -> Result<Vec<LedgerEntryModel>, Error> {
        Ok(LedgerRepository::new(self.db).history(user_id).await?)
    }

    /// Net minutes booked against one PIREP.
    pub async fn pirep_balance(&self, pirep_id: i32) -> Result<i64, Error> {
        Ok(LedgerRepository::new(self.db).sum_for_pirep(pirep_id).await?)
    }
}

#[cfg(test)]
mod tests {

    mod append {
        use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType};
        use logbook_test_utils::prelude::*;

        use crate::{
            error::{ledger::LedgerError, Error},
            model::ledger::NewLedgerEntry,
            service::ledger::LedgerService,
        };

        /// Expect Error when appending zero minutes, with nothing written
        #[tokio::test]
        async fn rejects_zero_minutes() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;

            let ledger = LedgerService::new(&test.db);
            let result = ledger
                .append(NewLedgerEntry::new(
                    pilot.id,
                    0,
                    FlightTimeCategory::Career,
                    FlightTimeSourceType::Manual,
                ))
                .await;

            assert!(matches!(
                result,
                Err(Error::LedgerError(LedgerError::ZeroMinutes(_)))
            ));
            assert!(ledger.history(pilot.id).await.unwrap().is_empty());

            Ok(())
        }

        /// Expect totals to reflect the entry as soon as the append returns
        #[tokio::test]
        async fn totals_reflect_appended_entries() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;

            let ledger = LedgerService::new(&test.db);
            ledger
                .append(NewLedgerEntry::new(
                    pilot.id,
                    90,
                    FlightTimeCategory::Career,
                    FlightTimeSourceType::Pirep,
                ))
                .await
                .unwrap();
            ledger
                .append(NewLedgerEntry::new(
                    pilot.id,
                    30,
                    FlightTimeCategory::FreeFly,
                    FlightTimeSourceType::Pirep,
                ))
                .await
                .unwrap();

            assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), 90);
            assert_eq!(ledger.free_fly_minutes(pilot.id).await.unwrap(), 30);
            assert_eq!(ledger.total_minutes(pilot.id).await.unwrap(), 120);

            Ok(())
        }
    }

    mod history {
        use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType};
        use logbook_test_utils::prelude::*;

        use crate::service::ledger::LedgerService;

        /// Expect replaying history in order to reproduce the stored totals
        #[tokio::test]
        async fn replay_reproduces_totals() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;
            test.ledger().insert_career_minutes(pilot.id, 300).await?;
            test.ledger()
                .insert_entry(
                    pilot.id,
                    -150,
                    FlightTimeCategory::Career,
                    FlightTimeSourceType::TypeRatingChange,
                    None,
                )
                .await?;
            test.ledger()
                .insert_entry(
                    pilot.id,
                    40,
                    FlightTimeCategory::FreeFly,
                    FlightTimeSourceType::Pirep,
                    None,
                )
                .await?;

            let ledger = LedgerService::new(&test.db);
            let history = ledger.history(pilot.id).await.unwrap();

            let ids: Vec<i32> = history.iter().map(|entry| entry.id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(ids, sorted);

            let replayed_career: i64 = history
                .iter()
                .filter(|entry| entry.category == FlightTimeCategory::Career)
                .map(|entry| entry.minutes as i64)
                .sum();
            assert_eq!(replayed_career, ledger.career_minutes(pilot.id).await.unwrap());
            assert_eq!(replayed_career, 150);

            Ok(())
        }
    }
}
