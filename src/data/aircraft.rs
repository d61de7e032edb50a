use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::db::AircraftModel;

pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    /// Creates a new instance of [`AircraftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, aircraft_id: i32) -> Result<Option<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find_by_id(aircraft_id)
            .one(self.db)
            .await
    }

    /// Entire catalogue ordered by name.
    pub async fn get_all(&self) -> Result<Vec<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find()
            .order_by_asc(entity::aircraft::Column::Name)
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await
    }

    /// Aircraft with the given IDs ordered by name; unknown IDs are skipped.
    pub async fn get_many(&self, aircraft_ids: &[i32]) -> Result<Vec<AircraftModel>, DbErr> {
        if aircraft_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Id.is_in(aircraft_ids.iter().copied()))
            .order_by_asc(entity::aircraft::Column::Name)
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await
    }
}
