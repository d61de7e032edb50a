//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main logbook crate so fixtures and tests read the same.

/// Type alias for pilot user database model.
pub type UserModel = entity::user::Model;

/// Type alias for aircraft database model.
pub type AircraftModel = entity::aircraft::Model;

/// Type alias for airline settings database model.
pub type AirlineModel = entity::airline::Model;

/// Type alias for rank database model.
pub type RankModel = entity::rank::Model;

/// Type alias for rank to aircraft assignment database model.
pub type RankAircraftModel = entity::rank_aircraft::Model;

/// Type alias for type rating database model.
pub type TypeRatingModel = entity::type_rating::Model;

/// Type alias for type rating to aircraft assignment database model.
pub type TypeRatingAircraftModel = entity::type_rating_aircraft::Model;

/// Type alias for held type rating database model.
pub type UserTypeRatingModel = entity::user_type_rating::Model;

/// Type alias for PIREP database model.
pub type PirepModel = entity::pirep::Model;

/// Type alias for flight time ledger entry database model.
pub type LedgerEntryModel = entity::flight_time_ledger::Model;
