//! Domain models shared between repositories and services.

pub mod db;
pub mod ledger;
pub mod pirep;
pub mod rankup;
pub mod role;
pub mod settings;
pub mod type_rating;
