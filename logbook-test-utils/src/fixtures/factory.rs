//! Factory functions for generating mock database models.
//!
//! Pure functions returning in-memory model instances with standard test values, suitable
//! for unit tests of logic that does not touch the database.

use chrono::Utc;

use crate::model::{AirlineModel, RankModel};

/// Create a mock rank database model for testing.
///
/// # Arguments
/// - `id` - Rank record ID
/// - `minimum_flight_time` - Lower bound of career minutes, inclusive
/// - `maximum_flight_time` - Upper bound of career minutes, inclusive, or unbounded
///
/// # Returns
/// - `RankModel` - A rank model that does not allow all aircraft
pub fn mock_rank_model(
    id: i32,
    minimum_flight_time: i32,
    maximum_flight_time: Option<i32>,
) -> RankModel {
    let now = Utc::now().naive_utc();
    RankModel {
        id,
        name: format!("Rank {}", id),
        minimum_flight_time,
        maximum_flight_time,
        allow_all_aircraft: false,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock airline settings model for testing.
///
/// # Arguments
/// - `enforce_type_ratings` - Whether type ratings restrict aircraft eligibility
/// - `type_rating_change_divisor` - Divisor applied to career time on a rating switch
///
/// # Returns
/// - `AirlineModel` - An airline model with test data
pub fn mock_airline_model(enforce_type_ratings: bool, type_rating_change_divisor: f64) -> AirlineModel {
    let now = Utc::now().naive_utc();
    AirlineModel {
        id: 1,
        name: "Test Virtual".to_string(),
        enforce_type_ratings,
        type_rating_change_divisor,
        created_at: now,
        updated_at: now,
    }
}
