use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::Error,
    model::{db::PirepEventModel, pirep::NewPirepEvent},
};

pub struct PirepEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PirepEventRepository<'a, C> {
    /// Creates a new instance of [`PirepEventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Record an audit event, serializing the before/after values as JSON.
    pub async fn create(&self, event: NewPirepEvent) -> Result<PirepEventModel, Error> {
        let previous_values = event
            .previous_values
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let new_values = event
            .new_values
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let event = entity::pirep_event::ActiveModel {
            pirep_id: ActiveValue::Set(event.pirep_id),
            action: ActiveValue::Set(event.action),
            performed_by: ActiveValue::Set(event.performed_by),
            reason: ActiveValue::Set(event.reason),
            previous_values: ActiveValue::Set(previous_values),
            new_values: ActiveValue::Set(new_values),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(event.insert(self.db).await?)
    }

    /// Audit trail of a PIREP in the order it was written.
    pub async fn get_by_pirep_id(&self, pirep_id: i32) -> Result<Vec<PirepEventModel>, Error> {
        Ok(entity::prelude::PirepEvent::find()
            .filter(entity::pirep_event::Column::PirepId.eq(pirep_id))
            .order_by_asc(entity::pirep_event::Column::Id)
            .all(self.db)
            .await?)
    }
}
