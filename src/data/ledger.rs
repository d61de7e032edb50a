use chrono::Utc;
use entity::sea_orm_active_enums::FlightTimeCategory;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::{db::LedgerEntryModel, ledger::NewLedgerEntry};

/// Append-only access to the flight time ledger.
///
/// There is deliberately no update or delete method: entries are immutable once written.
pub struct LedgerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LedgerRepository<'a, C> {
    /// Creates a new instance of [`LedgerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn append(&self, entry: NewLedgerEntry) -> Result<LedgerEntryModel, DbErr> {
        let entry = entity::flight_time_ledger::ActiveModel {
            user_id: ActiveValue::Set(entry.user_id),
            minutes: ActiveValue::Set(entry.minutes),
            category: ActiveValue::Set(entry.category),
            source_type: ActiveValue::Set(entry.source_type),
            pirep_id: ActiveValue::Set(entry.pirep_id),
            note: ActiveValue::Set(entry.note),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Sum of signed minutes for a user, optionally limited to one category. Zero when empty.
    pub async fn sum_minutes(
        &self,
        user_id: i32,
        category: Option<FlightTimeCategory>,
    ) -> Result<i64, DbErr> {
        let mut query = entity::prelude::FlightTimeLedger::find()
            .select_only()
            .column_as(entity::flight_time_ledger::Column::Minutes.sum(), "total")
            .filter(entity::flight_time_ledger::Column::UserId.eq(user_id));

        if let Some(category) = category {
            query = query.filter(entity::flight_time_ledger::Column::Category.eq(category));
        }

        let total = query.into_tuple::<Option<i64>>().one(self.db).await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Net minutes of every entry tied to one PIREP.
    pub async fn sum_for_pirep(&self, pirep_id: i32) -> Result<i64, DbErr> {
        let total = entity::prelude::FlightTimeLedger::find()
            .select_only()
            .column_as(entity::flight_time_ledger::Column::Minutes.sum(), "total")
            .filter(entity::flight_time_ledger::Column::PirepId.eq(pirep_id))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// All entries for a user in creation order.
    pub async fn history(&self, user_id: i32) -> Result<Vec<LedgerEntryModel>, DbErr> {
        entity::prelude::FlightTimeLedger::find()
            .filter(entity::flight_time_ledger::Column::UserId.eq(user_id))
            .order_by_asc(entity::flight_time_ledger::Column::Id)
            .all(self.db)
            .await
    }

    /// Most recently appended entry tied to a PIREP.
    pub async fn latest_for_pirep(&self, pirep_id: i32) -> Result<Option<LedgerEntryModel>, DbErr> {
        entity::prelude::FlightTimeLedger::find()
            .filter(entity::flight_time_ledger::Column::PirepId.eq(pirep_id))
            .order_by_desc(entity::flight_time_ledger::Column::Id)
            .one(self.db)
            .await
    }
}
