pub use sea_orm_migration::prelude::*;

mod m20261017_000001_user;
mod m20261017_000002_aircraft;
mod m20261017_000003_airline;
mod m20261017_000004_rank;
mod m20261017_000005_rank_aircraft;
mod m20261017_000006_type_rating;
mod m20261017_000007_type_rating_aircraft;
mod m20261017_000008_user_type_rating;
mod m20261017_000009_pirep;
mod m20261017_000010_pirep_event;
mod m20261017_000011_flight_time_ledger;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_user::Migration),
            Box::new(m20261017_000002_aircraft::Migration),
            Box::new(m20261017_000003_airline::Migration),
            Box::new(m20261017_000004_rank::Migration),
            Box::new(m20261017_000005_rank_aircraft::Migration),
            Box::new(m20261017_000006_type_rating::Migration),
            Box::new(m20261017_000007_type_rating_aircraft::Migration),
            Box::new(m20261017_000008_user_type_rating::Migration),
            Box::new(m20261017_000009_pirep::Migration),
            Box::new(m20261017_000010_pirep_event::Migration),
            Box::new(m20261017_000011_flight_time_ledger::Migration),
        ]
    }
}
