//! Aircraft eligibility resolution.
//!
//! Ranks unlock aircraft cumulatively: a rank may fly its own aircraft plus those of every rank
//! at or below its minimum flight time. Under type rating enforcement the rank set is further
//! narrowed to aircraft covered by the pilot's held ratings. Admins and owners bypass both.

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    data::{
        aircraft::AircraftRepository, airline::AirlineRepository, rank::RankRepository,
        type_rating::TypeRatingRepository, user::UserRepository,
    },
    error::{eligibility::EligibilityError, Error},
    model::{
        db::{AircraftModel, RankModel},
        role::RoleSet,
    },
    service::ledger::LedgerService,
};

/// Select the rank covering `career_minutes`.
///
/// Picks the rank with the highest minimum flight time whose minimum is at or below the minutes
/// and whose maximum, when set, is at or above them. `None` when no rank matches.
pub fn resolve_rank_for_minutes(ranks: &[RankModel], career_minutes: i64) -> Option<&RankModel> {
    ranks
        .iter()
        .filter(|rank| i64::from(rank.minimum_flight_time) <= career_minutes)
        .filter(|rank| {
            rank.maximum_flight_time
                .map_or(true, |maximum| career_minutes <= i64::from(maximum))
        })
        .max_by_key(|rank| rank.minimum_flight_time)
}

pub struct EligibilityResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EligibilityResolver<'a, C> {
    /// Creates a new instance of [`EligibilityResolver`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Aircraft a rank may fly, ordered by name and without duplicates.
    ///
    /// # Returns
    /// - `Ok(Vec<AircraftModel>)` - Entire catalogue when the rank allows all aircraft, otherwise
    ///   the cascaded set. Empty for an unknown rank.
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn allowed_aircraft_for_rank(&self, rank_id: i32) -> Result<Vec<AircraftModel>, Error> {
        let Some(rank) = RankRepository::new(self.db).get(rank_id).await? else {
            tracing::debug!(rank_id = %rank_id, "Rank not found while resolving allowed aircraft");
            return Ok(Vec::new());
        };

        self.allowed_aircraft_for(&rank).await
    }

    /// Aircraft a user may file a PIREP for, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<AircraftModel>)` - Allowed aircraft, possibly empty under enforcement
    /// - `Err(Error::EligibilityError)` - User does not exist
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn allowed_aircraft_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<AircraftModel>, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(EligibilityError::UserNotFound(user_id))?;

        let aircraft_repo = AircraftRepository::new(self.db);

        if RoleSet::parse(&user.roles).is_admin() {
            return Ok(aircraft_repo.get_all().await?);
        }

        let career_minutes = LedgerService::new(self.db).career_minutes(user_id).await?;
        let ranks = RankRepository::new(self.db).get_all().await?;

        let base = match resolve_rank_for_minutes(&ranks, career_minutes) {
            Some(rank) => self.allowed_aircraft_for(rank).await?,
            None => {
                tracing::debug!(
                    user_id = %user_id,
                    career_minutes = %career_minutes,
                    "No rank matches career minutes, using entire catalogue"
                );
                aircraft_repo.get_all().await?
            }
        };

        let settings = AirlineRepository::new(self.db).get_settings().await?;
        if !settings.enforce_type_ratings {
            return Ok(base);
        }

        let held = TypeRatingRepository::new(self.db).get_held(user_id).await?;

        Ok(base
            .into_iter()
            .filter(|aircraft| held.authorizes(aircraft.id))
            .collect())
    }

    /// Whether a user may file a PIREP for the given aircraft.
    pub async fn is_allowed_for_user(&self, user_id: i32, aircraft_id: i32) -> Result<bool, Error> {
        Ok(self
            .allowed_aircraft_for_user(user_id)
            .await?
            .iter()
            .any(|aircraft| aircraft.id == aircraft_id))
    }

    async fn allowed_aircraft_for(&self, rank: &RankModel) -> Result<Vec<AircraftModel>, Error> {
        let aircraft_repo = AircraftRepository::new(self.db);

        if rank.allow_all_aircraft {
            return Ok(aircraft_repo.get_all().await?);
        }

        let rank_repo = RankRepository::new(self.db);
        let rank_ids = rank_repo
            .get_ids_at_or_below(rank.minimum_flight_time)
            .await?;
        let aircraft_ids = rank_repo.get_aircraft_ids_for_ranks(&rank_ids).await?;

        Ok(aircraft_repo.get_many(&aircraft_ids).await?)
    }
}
