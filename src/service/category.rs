//! Flight time category resolution.
//!
//! Minutes count toward career progression only when type ratings are enforced and the flown
//! aircraft is covered by a rating the pilot holds. Everything else is free flying.

use entity::sea_orm_active_enums::FlightTimeCategory;
use sea_orm::ConnectionTrait;

use crate::{
    data::{airline::AirlineRepository, type_rating::TypeRatingRepository},
    error::Error,
    model::{settings::AirlineSettings, type_rating::HeldTypeRatings},
};

/// Decide the category for a flight from already loaded state.
pub fn resolve_category(
    aircraft_id: Option<i32>,
    settings: &AirlineSettings,
    held: &HeldTypeRatings,
) -> FlightTimeCategory {
    let Some(aircraft_id) = aircraft_id else {
        return FlightTimeCategory::FreeFly;
    };

    if !settings.enforce_type_ratings || held.is_empty() {
        return FlightTimeCategory::FreeFly;
    }

    if held.authorizes(aircraft_id) {
        FlightTimeCategory::Career
    } else {
        FlightTimeCategory::FreeFly
    }
}

/// Loads airline settings and held ratings, then applies [`resolve_category`].
pub struct CategoryResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryResolver<'a, C> {
    /// Creates a new instance of [`CategoryResolver`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn resolve(
        &self,
        user_id: i32,
        aircraft_id: Option<i32>,
    ) -> Result<FlightTimeCategory, Error> {
        if aircraft_id.is_none() {
            return Ok(FlightTimeCategory::FreeFly);
        }

        let settings = AirlineRepository::new(self.db).get_settings().await?;
        if !settings.enforce_type_ratings {
            return Ok(FlightTimeCategory::FreeFly);
        }

        let held = TypeRatingRepository::new(self.db).get_held(user_id).await?;

        Ok(resolve_category(aircraft_id, &settings, &held))
    }
}
