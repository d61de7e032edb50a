//! Type rating assignment.
//!
//! Under [`TypeRatingPolicy::Single`] a pilot holds at most one rating and switching to another
//! one rescales career minutes by the airline's divisor. Under [`TypeRatingPolicy::Multiple`]
//! ratings are plain relations with no ledger effect.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{airline::AirlineRepository, type_rating::TypeRatingRepository, user::UserRepository},
    error::{type_rating::TypeRatingError, Error},
    model::{ledger::NewLedgerEntry, settings::TypeRatingPolicy, type_rating::TypeRatingOutcome},
    service::{ledger::LedgerService, retry::RetryContext},
};

pub struct TypeRatingService<'a> {
    db: &'a DatabaseConnection,
    policy: TypeRatingPolicy,
}

impl<'a> TypeRatingService<'a> {
    /// Creates a new instance of [`TypeRatingService`]
    pub fn new(db: &'a DatabaseConnection, policy: TypeRatingPolicy) -> Self {
        Self { db, policy }
    }

    /// Grant a type rating to a pilot.
    ///
    /// # Returns
    /// - `Ok(TypeRatingOutcome::Added)` - Rating granted with no minute adjustment
    /// - `Ok(TypeRatingOutcome::Switched)` - Single rating policy replaced a different rating
    /// - `Err(Error::TypeRatingError)` - Unknown user or rating, or the rating is already held
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was applied
    pub async fn add_type_rating(
        &self,
        user_id: i32,
        type_rating_id: i32,
    ) -> Result<TypeRatingOutcome, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();
        let policy = self.policy;

        let outcome = ctx
            .execute_with_retry(
                &format!(
                    "add type rating ID {} to user ID {}",
                    type_rating_id, user_id
                ),
                || {
                    let db = db.clone();

                    Box::pin(async move {
                        let txn = db.begin().await?;
                        let outcome = add(&txn, policy, user_id, type_rating_id).await?;
                        txn.commit().await?;

                        Ok(outcome)
                    })
                },
            )
            .await?;

        tracing::debug!(
            user_id = %user_id,
            type_rating_id = %type_rating_id,
            outcome = ?outcome,
            "{}",
            outcome.message()
        );

        Ok(outcome)
    }

    /// Take a type rating away from a pilot. Removing a rating that is not held changes nothing.
    pub async fn remove_type_rating(
        &self,
        user_id: i32,
        type_rating_id: i32,
    ) -> Result<TypeRatingOutcome, Error> {
        let removed = TypeRatingRepository::new(self.db)
            .remove_from_user(user_id, type_rating_id)
            .await?;

        let outcome = if removed == 0 {
            TypeRatingOutcome::AlreadyRemoved
        } else {
            TypeRatingOutcome::Removed
        };

        tracing::debug!(
            user_id = %user_id,
            type_rating_id = %type_rating_id,
            "{}",
            outcome.message()
        );

        Ok(outcome)
    }
}

/// Career minutes after a switch, rounded half up.
pub fn rescale_career_minutes(current: i64, divisor: f64) -> i64 {
    (current as f64 / divisor + 0.5).floor() as i64
}

/// Grant the rating inside `txn` with the user row locked.
async fn add(
    txn: &DatabaseTransaction,
    policy: TypeRatingPolicy,
    user_id: i32,
    type_rating_id: i32,
) -> Result<TypeRatingOutcome, Error> {
    UserRepository::new(txn)
        .get_for_update(user_id)
        .await?
        .ok_or(TypeRatingError::UserNotFound(user_id))?;

    let type_rating_repo = TypeRatingRepository::new(txn);
    type_rating_repo
        .get(type_rating_id)
        .await?
        .ok_or(TypeRatingError::NotFound(type_rating_id))?;

    let held = type_rating_repo.get_user_relations(user_id).await?;
    if held
        .iter()
        .any(|relation| relation.type_rating_id == type_rating_id)
    {
        return Err(TypeRatingError::AlreadyHeld {
            user_id,
            type_rating_id,
        }
        .into());
    }

    if policy == TypeRatingPolicy::Multiple || held.is_empty() {
        type_rating_repo.add_to_user(user_id, type_rating_id).await?;
        return Ok(TypeRatingOutcome::Added);
    }

    let settings = AirlineRepository::new(txn).get_settings().await?;
    let divisor = settings.effective_divisor();

    let ledger = LedgerService::new(txn);
    let current = ledger.career_minutes(user_id).await?;
    let adjustment = i32::try_from(rescale_career_minutes(current, divisor) - current)
        .map_err(|e| Error::InternalError(format!("Career minute adjustment overflow: {}", e)))?;

    if adjustment != 0 {
        ledger
            .append(
                NewLedgerEntry::new(
                    user_id,
                    adjustment,
                    FlightTimeCategory::Career,
                    FlightTimeSourceType::TypeRatingChange,
                )
                .with_note(format!(
                    "Type rating switch divisor applied (x{})",
                    divisor
                )),
            )
            .await?;
    }

    type_rating_repo.remove_all_from_user(user_id).await?;
    type_rating_repo.add_to_user(user_id, type_rating_id).await?;

    Ok(TypeRatingOutcome::Switched { adjustment })
}
