//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the engine, so signatures don't reach into the generated `entity` crate directly.

/// Type alias for pilot user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `name` - Display name
/// - `roles` - Comma separated role tokens, parsed with [`RoleSet::parse`](crate::model::role::RoleSet::parse)
/// - `created_at` / `updated_at` - Record timestamps
pub type UserModel = entity::user::Model;

/// Type alias for aircraft database model.
pub type AircraftModel = entity::aircraft::Model;

/// Type alias for airline settings database model.
pub type AirlineModel = entity::airline::Model;

/// Type alias for rank database model.
///
/// A rank covers career minutes from `minimum_flight_time` up to and including
/// `maximum_flight_time`, which is unbounded when unset.
pub type RankModel = entity::rank::Model;

/// Type alias for type rating database model.
pub type TypeRatingModel = entity::type_rating::Model;

/// Type alias for the user to type rating relation.
pub type UserTypeRatingModel = entity::user_type_rating::Model;

/// Type alias for PIREP database model.
///
/// The only record mutated in place; `status`, `denied_reason` and `updated_at` are the only
/// fields that change after creation.
pub type PirepModel = entity::pirep::Model;

/// Type alias for PIREP audit event database model.
pub type PirepEventModel = entity::pirep_event::Model;

/// Type alias for flight time ledger entry database model.
///
/// Entries are immutable once appended; corrections are further signed entries.
pub type LedgerEntryModel = entity::flight_time_ledger::Model;
