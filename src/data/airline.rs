use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::settings::AirlineSettings;

pub struct AirlineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirlineRepository<'a, C> {
    /// Creates a new instance of [`AirlineRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Read the current airline settings, falling back to defaults when no airline row exists.
    pub async fn get_settings(&self) -> Result<AirlineSettings, DbErr> {
        let airline = entity::prelude::Airline::find()
            .order_by_asc(entity::airline::Column::Id)
            .one(self.db)
            .await?;

        Ok(airline
            .as_ref()
            .map(AirlineSettings::from)
            .unwrap_or_default())
    }
}
