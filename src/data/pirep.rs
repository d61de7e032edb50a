use chrono::Utc;
use entity::sea_orm_active_enums::PirepStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::{db::PirepModel, pirep::NewPirep};

pub struct PirepRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PirepRepository<'a, C> {
    /// Creates a new instance of [`PirepRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new PIREP in the pending state
    pub async fn create(&self, user_id: i32, pirep: NewPirep) -> Result<PirepModel, DbErr> {
        let now = Utc::now().naive_utc();
        let pirep = entity::pirep::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            aircraft_id: ActiveValue::Set(pirep.aircraft_id),
            flight_time: ActiveValue::Set(pirep.flight_time),
            status: ActiveValue::Set(PirepStatus::Pending),
            denied_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        pirep.insert(self.db).await
    }

    pub async fn get(&self, pirep_id: i32) -> Result<Option<PirepModel>, DbErr> {
        entity::prelude::Pirep::find_by_id(pirep_id)
            .one(self.db)
            .await
    }

    /// Get a PIREP and hold a row lock until the surrounding transaction ends.
    pub async fn get_for_update(&self, pirep_id: i32) -> Result<Option<PirepModel>, DbErr> {
        entity::prelude::Pirep::find_by_id(pirep_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Lock and return every PIREP with an ID in `pirep_ids`, ordered by ID.
    pub async fn get_many_for_update(&self, pirep_ids: &[i32]) -> Result<Vec<PirepModel>, DbErr> {
        entity::prelude::Pirep::find()
            .filter(entity::pirep::Column::Id.is_in(pirep_ids.iter().copied()))
            .order_by_asc(entity::pirep::Column::Id)
            .lock_exclusive()
            .all(self.db)
            .await
    }

    /// Move a PIREP to `new_status` only if it is still in `expected_status`.
    ///
    /// # Returns
    /// - `Ok(1)` - Status updated
    /// - `Ok(0)` - The PIREP is gone or its status changed since it was read
    pub async fn update_status(
        &self,
        pirep_id: i32,
        expected_status: PirepStatus,
        new_status: PirepStatus,
        denied_reason: Option<String>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Pirep::update_many()
            .set(entity::pirep::ActiveModel {
                status: ActiveValue::Set(new_status),
                denied_reason: ActiveValue::Set(denied_reason),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(entity::pirep::Column::Id.eq(pirep_id))
            .filter(entity::pirep::Column::Status.eq(expected_status))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Set the status of every listed PIREP in a single statement, clearing any denial reason.
    pub async fn update_status_many(
        &self,
        pirep_ids: &[i32],
        new_status: PirepStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Pirep::update_many()
            .set(entity::pirep::ActiveModel {
                status: ActiveValue::Set(new_status),
                denied_reason: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(entity::pirep::Column::Id.is_in(pirep_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Delete a PIREP only if it is still in `expected_status`.
    pub async fn delete(&self, pirep_id: i32, expected_status: PirepStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Pirep::delete_many()
            .filter(entity::pirep::Column::Id.eq(pirep_id))
            .filter(entity::pirep::Column::Status.eq(expected_status))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::sea_orm_active_enums::PirepStatus;
        use logbook_test_utils::prelude::*;

        use crate::{data::pirep::PirepRepository, model::pirep::NewPirep};

        /// Expect a pending PIREP without a denial reason
        #[tokio::test]
        async fn creates_pending_pirep() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;

            let pirep_repo = PirepRepository::new(&test.db);
            let pirep = pirep_repo
                .create(
                    pilot.id,
                    NewPirep {
                        aircraft_id: None,
                        flight_time: 95,
                    },
                )
                .await?;

            assert_eq!(pirep.status, PirepStatus::Pending);
            assert_eq!(pirep.flight_time, 95);
            assert!(pirep.denied_reason.is_none());

            Ok(())
        }
    }

    mod update_status {
        use entity::sea_orm_active_enums::PirepStatus;
        use logbook_test_utils::prelude::*;

        use crate::data::pirep::PirepRepository;

        /// Expect one row updated when the expected status matches
        #[tokio::test]
        async fn updates_matching_status() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;
            let pirep = test.pirep().insert_pending_pirep(pilot.id, None, 60).await?;

            let pirep_repo = PirepRepository::new(&test.db);
            let rows = pirep_repo
                .update_status(
                    pirep.id,
                    PirepStatus::Pending,
                    PirepStatus::Denied,
                    Some("no logs".to_string()),
                )
                .await?;

            assert_eq!(rows, 1);
            let updated = pirep_repo.get(pirep.id).await?.unwrap();
            assert_eq!(updated.status, PirepStatus::Denied);
            assert_eq!(updated.denied_reason.as_deref(), Some("no logs"));

            Ok(())
        }

        /// Expect no rows updated when the status changed since it was read
        #[tokio::test]
        async fn skips_stale_expected_status() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;
            let pirep = test
                .pirep()
                .insert_pirep(pilot.id, None, 60, PirepStatus::Approved)
                .await?;

            let pirep_repo = PirepRepository::new(&test.db);
            let rows = pirep_repo
                .update_status(pirep.id, PirepStatus::Pending, PirepStatus::Approved, None)
                .await?;

            assert_eq!(rows, 0);

            Ok(())
        }
    }

    mod delete {
        use entity::sea_orm_active_enums::PirepStatus;
        use logbook_test_utils::prelude::*;

        use crate::data::pirep::PirepRepository;

        /// Expect the record removed when the expected status matches
        #[tokio::test]
        async fn deletes_matching_status() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let pilot = test.user().insert_user("Pilot").await?;
            let pirep = test.pirep().insert_pending_pirep(pilot.id, None, 60).await?;

            let pirep_repo = PirepRepository::new(&test.db);

            assert_eq!(pirep_repo.delete(pirep.id, PirepStatus::Approved).await?, 0);
            assert_eq!(pirep_repo.delete(pirep.id, PirepStatus::Pending).await?, 1);
            assert!(pirep_repo.get(pirep.id).await?.is_none());

            Ok(())
        }
    }
}
