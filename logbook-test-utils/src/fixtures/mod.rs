//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a small
//! fixture helper for one area of the schema:
//!
//! - `airline` - Airline settings row
//! - `fleet` - Aircraft records
//! - `ledger` - Flight time ledger entries
//! - `pirep` - PIREP records
//! - `rank` - Ranks and rank aircraft assignments
//! - `type_rating` - Type ratings, their aircraft and held ratings
//! - `user` - Pilot user records
//! - `factory` - In-memory models that never touch the database

pub mod airline;
pub mod factory;
pub mod fleet;
pub mod ledger;
pub mod pirep;
pub mod rank;
pub mod type_rating;
pub mod user;
