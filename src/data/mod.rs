//! Repositories over the logbook tables.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so it runs equally on the pooled
//! connection or inside a transaction opened by a service.

pub mod aircraft;
pub mod airline;
pub mod ledger;
pub mod pirep;
pub mod pirep_event;
pub mod rank;
pub mod type_rating;
pub mod user;
