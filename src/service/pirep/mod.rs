//! PIREP lifecycle service.
//!
//! Drives the status state machine (Pending, Approved, Denied) and its ledger side effects.
//! Every transition runs in one transaction that re-reads the PIREP under a row lock, writes the
//! status only if it is unchanged since that read, books or reverses flight time, and records an
//! audit event. Rank checks are scheduled only after the transaction commits.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{FlightTimeSourceType, PirepEventAction, PirepStatus};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{
        aircraft::AircraftRepository, ledger::LedgerRepository, pirep::PirepRepository,
        pirep_event::PirepEventRepository,
    },
    error::{pirep::PirepError, Error},
    model::{
        db::{PirepEventModel, PirepModel},
        ledger::NewLedgerEntry,
        pirep::{NewPirep, NewPirepEvent, PirepEventValues},
        role::{Actor, Role},
    },
    service::{
        category::CategoryResolver,
        eligibility::EligibilityResolver,
        ledger::LedgerService,
        rankup::{CareerChange, RankupTrigger},
        retry::RetryContext,
    },
};

/// Roles allowed to review PIREPs filed by other pilots.
const REVIEWER_ROLES: &[Role] = &[Role::Pireps];

/// Service for submitting, reviewing and deleting PIREPs.
pub struct PirepService<'a> {
    db: &'a DatabaseConnection,
    rankup: &'a RankupTrigger,
}

impl<'a> PirepService<'a> {
    /// Creates a new instance of PirepService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `rankup` - Trigger notified after career minutes increase
    pub fn new(db: &'a DatabaseConnection, rankup: &'a RankupTrigger) -> Self {
        Self { db, rankup }
    }

    /// File a new PIREP in the pending state.
    ///
    /// # Arguments
    /// - `actor` - Pilot filing the report
    /// - `new_pirep` - Aircraft and flight time flown
    ///
    /// # Returns
    /// - `Ok(PirepModel)` - Stored pending PIREP
    /// - `Err(Error::PirepError)` - Non-positive flight time, unknown aircraft, or an aircraft the
    ///   pilot may not fly
    /// - `Err(Error::EligibilityError)` - Filing user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn submit_pirep(&self, actor: &Actor, new_pirep: NewPirep) -> Result<PirepModel, Error> {
        if new_pirep.flight_time <= 0 {
            return Err(PirepError::NonPositiveFlightTime(new_pirep.flight_time).into());
        }

        if let Some(aircraft_id) = new_pirep.aircraft_id {
            AircraftRepository::new(self.db)
                .get(aircraft_id)
                .await?
                .ok_or(PirepError::AircraftNotFound(aircraft_id))?;

            let allowed = EligibilityResolver::new(self.db)
                .is_allowed_for_user(actor.user_id, aircraft_id)
                .await?;
            if !allowed {
                return Err(PirepError::AircraftNotAllowed {
                    user_id: actor.user_id,
                    aircraft_id,
                }
                .into());
            }
        }

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let user_id = actor.user_id;

        let pirep = ctx
            .execute_with_retry(&format!("submit PIREP for user ID {}", user_id), || {
                let db = db.clone();
                let new_pirep = new_pirep.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let pirep = create_pending(&txn, user_id, new_pirep).await?;
                    txn.commit().await?;

                    Ok(pirep)
                })
            })
            .await?;

        tracing::debug!(
            pirep_id = %pirep.id,
            user_id = %pirep.user_id,
            flight_time = %pirep.flight_time,
            "PIREP submitted"
        );

        Ok(pirep)
    }

    /// Move a PIREP to a new status, booking or reversing its flight time.
    ///
    /// Approving books `+flight_time` in the resolved category unless the PIREP is already
    /// approved. Leaving the approved state appends a compensating entry in the category the
    /// time was booked under. A denial requires a non-blank reason; every other status clears it.
    ///
    /// # Arguments
    /// - `actor` - Reviewer performing the change, must hold the Pireps role (or Admin/Owner)
    /// - `pirep_id` - PIREP to update
    /// - `new_status` - Target status
    /// - `denied_reason` - Reason shown to the pilot, required for `Denied`
    ///
    /// # Returns
    /// - `Ok(PirepModel)` - PIREP as stored after the transition
    /// - `Err(Error::PirepError)` - Not permitted, not found, missing reason, or the PIREP kept
    ///   changing concurrently until retries were exhausted
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was applied
    pub async fn set_pirep_status(
        &self,
        actor: &Actor,
        pirep_id: i32,
        new_status: PirepStatus,
        denied_reason: Option<String>,
    ) -> Result<PirepModel, Error> {
        if !actor.roles.has_required_role(REVIEWER_ROLES) {
            return Err(PirepError::StatusChangeNotPermitted(actor.user_id).into());
        }

        let denied_reason = validate_denied_reason(new_status, denied_reason)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let performed_by = actor.user_id;

        let (pirep, career_change) = ctx
            .execute_with_retry(
                &format!("status change of PIREP ID {} to {:?}", pirep_id, new_status),
                || {
                    let db = db.clone();
                    let denied_reason = denied_reason.clone();

                    Box::pin(async move {
                        let txn = db.begin().await?;
                        let result =
                            transition(&txn, performed_by, pirep_id, new_status, denied_reason)
                                .await?;
                        txn.commit().await?;

                        Ok(result)
                    })
                },
            )
            .await?;

        if let Some(change) = career_change {
            self.rankup.schedule(change);
        }

        Ok(pirep)
    }

    /// Approve a batch of PIREPs.
    ///
    /// Every ID must exist before anything is written. Statuses are updated in one statement,
    /// then flight time is booked for each PIREP that was not already approved. Each PIREP gets
    /// its own audit event and its own rank check.
    ///
    /// # Returns
    /// - `Ok(Vec<PirepModel>)` - Approved PIREPs ordered by ID
    /// - `Err(Error::PirepError)` - Not permitted, empty batch, or some IDs missing (listed)
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was applied
    pub async fn bulk_approve(
        &self,
        actor: &Actor,
        pirep_ids: &[i32],
    ) -> Result<Vec<PirepModel>, Error> {
        if !actor.roles.has_required_role(REVIEWER_ROLES) {
            return Err(PirepError::StatusChangeNotPermitted(actor.user_id).into());
        }

        let pirep_ids: Vec<i32> = pirep_ids
            .iter()
            .copied()
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();
        if pirep_ids.is_empty() {
            return Err(PirepError::EmptyBatch.into());
        }

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let performed_by = actor.user_id;

        let (pireps, career_changes) = ctx
            .execute_with_retry(&format!("bulk approve of {} PIREPs", pirep_ids.len()), || {
                let db = db.clone();
                let pirep_ids = pirep_ids.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let result = approve_batch(&txn, performed_by, &pirep_ids).await?;
                    txn.commit().await?;

                    Ok(result)
                })
            })
            .await?;

        // Each check runs on its own task so one failure cannot hold back the rest
        for change in career_changes {
            self.rankup.schedule(change);
        }

        Ok(pireps)
    }

    /// Delete a PIREP, reversing its flight time first when it is approved.
    ///
    /// Pending PIREPs may be deleted by their author or a reviewer; reviewed PIREPs only by a
    /// reviewer. The reversal, the delete and the audit event commit together.
    ///
    /// # Returns
    /// - `Ok(())` - PIREP deleted
    /// - `Err(Error::PirepError)` - Not found or not permitted
    /// - `Err(Error::DbErr)` - Database operation failed, the PIREP and ledger are unchanged
    pub async fn delete_pirep(&self, actor: &Actor, pirep_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();
        let performed_by = actor.user_id;
        let is_reviewer = actor.roles.has_required_role(REVIEWER_ROLES);

        ctx.execute_with_retry(&format!("delete PIREP ID {}", pirep_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;
                let pirep = delete(&txn, performed_by, is_reviewer, pirep_id).await?;
                txn.commit().await?;

                tracing::debug!(
                    pirep_id = %pirep.id,
                    user_id = %pirep.user_id,
                    performed_by = %performed_by,
                    "PIREP deleted"
                );

                Ok(())
            })
        })
        .await
    }

    /// Audit trail of a PIREP in the order it was written. Survives deletion of the PIREP.
    pub async fn pirep_events(&self, pirep_id: i32) -> Result<Vec<PirepEventModel>, Error> {
        PirepEventRepository::new(self.db)
            .get_by_pirep_id(pirep_id)
            .await
    }
}

/// Require a non-blank reason for a denial and drop it for every other status.
fn validate_denied_reason(
    new_status: PirepStatus,
    denied_reason: Option<String>,
) -> Result<Option<String>, Error> {
    if new_status != PirepStatus::Denied {
        return Ok(None);
    }

    match denied_reason {
        Some(reason) if !reason.trim().is_empty() => Ok(Some(reason)),
        _ => Err(PirepError::DeniedReasonRequired.into()),
    }
}

/// Insert a pending PIREP and its submission event inside `txn`.
async fn create_pending(
    txn: &DatabaseTransaction,
    user_id: i32,
    new_pirep: NewPirep,
) -> Result<PirepModel, Error> {
    let pirep = PirepRepository::new(txn).create(user_id, new_pirep).await?;

    PirepEventRepository::new(txn)
        .create(NewPirepEvent {
            pirep_id: pirep.id,
            action: PirepEventAction::Submitted,
            performed_by: user_id,
            reason: None,
            previous_values: None,
            new_values: Some(PirepEventValues::from(&pirep)),
        })
        .await?;

    Ok(pirep)
}

/// Check permission, reverse approved flight time and remove the PIREP inside `txn`.
async fn delete(
    txn: &DatabaseTransaction,
    performed_by: i32,
    is_reviewer: bool,
    pirep_id: i32,
) -> Result<PirepModel, Error> {
    let pirep_repo = PirepRepository::new(txn);

    let pirep = pirep_repo
        .get_for_update(pirep_id)
        .await?
        .ok_or(PirepError::NotFound(pirep_id))?;

    let permitted = match pirep.status {
        PirepStatus::Pending => is_reviewer || pirep.user_id == performed_by,
        PirepStatus::Approved | PirepStatus::Denied => is_reviewer,
    };
    if !permitted {
        return Err(PirepError::DeleteNotPermitted(performed_by).into());
    }

    if pirep.status == PirepStatus::Approved {
        reverse_flight_time(txn, &pirep, "PIREP deleted").await?;
    }

    if pirep_repo.delete(pirep.id, pirep.status).await? == 0 {
        return Err(PirepError::ConcurrentTransition(pirep.id).into());
    }

    PirepEventRepository::new(txn)
        .create(NewPirepEvent {
            pirep_id: pirep.id,
            action: PirepEventAction::Deleted,
            performed_by,
            reason: None,
            previous_values: Some(PirepEventValues::from(&pirep)),
            new_values: None,
        })
        .await?;

    Ok(pirep)
}

/// Apply one status transition inside `txn`.
async fn transition(
    txn: &DatabaseTransaction,
    performed_by: i32,
    pirep_id: i32,
    new_status: PirepStatus,
    denied_reason: Option<String>,
) -> Result<(PirepModel, Option<CareerChange>), Error> {
    let pirep_repo = PirepRepository::new(txn);

    // Row lock is held until commit
    let pirep = pirep_repo
        .get_for_update(pirep_id)
        .await?
        .ok_or(PirepError::NotFound(pirep_id))?;
    let previous_status = pirep.status;

    let rows = pirep_repo
        .update_status(pirep.id, previous_status, new_status, denied_reason)
        .await?;
    if rows == 0 {
        return Err(PirepError::ConcurrentTransition(pirep.id).into());
    }

    let was_approved = previous_status == PirepStatus::Approved;
    let is_approved = new_status == PirepStatus::Approved;

    let career_change = if is_approved && !was_approved {
        Some(book_flight_time(txn, &pirep).await?)
    } else {
        if was_approved && !is_approved {
            reverse_flight_time(txn, &pirep, "PIREP unapproved").await?;
        }
        None
    };

    let updated = pirep_repo.get(pirep.id).await?.ok_or_else(|| {
        Error::InternalError(format!(
            "PIREP ID {} disappeared inside its own transition",
            pirep.id
        ))
    })?;

    PirepEventRepository::new(txn)
        .create(NewPirepEvent {
            pirep_id: pirep.id,
            action: PirepEventAction::StatusChange,
            performed_by,
            reason: updated.denied_reason.clone(),
            previous_values: Some(PirepEventValues::from(&pirep)),
            new_values: Some(PirepEventValues::from(&updated)),
        })
        .await?;

    tracing::debug!(
        pirep_id = %pirep.id,
        user_id = %pirep.user_id,
        previous_status = ?previous_status,
        new_status = ?new_status,
        "PIREP status changed"
    );

    Ok((updated, career_change))
}

/// Approve every PIREP in `pirep_ids` inside `txn`.
async fn approve_batch(
    txn: &DatabaseTransaction,
    performed_by: i32,
    pirep_ids: &[i32],
) -> Result<(Vec<PirepModel>, Vec<CareerChange>), Error> {
    let pirep_repo = PirepRepository::new(txn);

    let pireps = pirep_repo.get_many_for_update(pirep_ids).await?;
    let found: BTreeSet<i32> = pireps.iter().map(|pirep| pirep.id).collect();
    let missing: Vec<i32> = pirep_ids
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect();
    if !missing.is_empty() {
        return Err(PirepError::BatchNotFound(missing).into());
    }

    pirep_repo
        .update_status_many(pirep_ids, PirepStatus::Approved)
        .await?;

    let mut career_changes = Vec::new();
    for pirep in &pireps {
        if pirep.status != PirepStatus::Approved {
            career_changes.push(book_flight_time(txn, pirep).await?);
        }
    }

    let approved = pirep_repo.get_many_for_update(pirep_ids).await?;
    let event_repo = PirepEventRepository::new(txn);
    for (previous, updated) in pireps.iter().zip(approved.iter()) {
        event_repo
            .create(NewPirepEvent {
                pirep_id: updated.id,
                action: PirepEventAction::StatusChange,
                performed_by,
                reason: None,
                previous_values: Some(PirepEventValues::from(previous)),
                new_values: Some(PirepEventValues::from(updated)),
            })
            .await?;
    }

    tracing::debug!(
        count = %approved.len(),
        performed_by = %performed_by,
        "PIREPs bulk approved"
    );

    Ok((approved, career_changes))
}

/// Book `+flight_time` for a PIREP entering the approved state.
async fn book_flight_time(
    txn: &DatabaseTransaction,
    pirep: &PirepModel,
) -> Result<CareerChange, Error> {
    let category = CategoryResolver::new(txn)
        .resolve(pirep.user_id, pirep.aircraft_id)
        .await?;

    let ledger = LedgerService::new(txn);
    let previous_minutes = ledger.career_minutes(pirep.user_id).await?;

    ledger
        .append(
            NewLedgerEntry::new(
                pirep.user_id,
                pirep.flight_time,
                category,
                FlightTimeSourceType::Pirep,
            )
            .with_pirep(pirep.id),
        )
        .await?;

    let new_minutes = ledger.career_minutes(pirep.user_id).await?;

    Ok(CareerChange {
        user_id: pirep.user_id,
        previous_minutes,
        new_minutes,
    })
}

/// Append a compensating `-flight_time` entry for a PIREP leaving the approved state.
///
/// Uses the category of the most recent entry booked for the PIREP. Without one, the category is
/// resolved again from current settings, which may differ from what approval would have used.
async fn reverse_flight_time(
    txn: &DatabaseTransaction,
    pirep: &PirepModel,
    note: &str,
) -> Result<(), Error> {
    let category = match LedgerRepository::new(txn).latest_for_pirep(pirep.id).await? {
        Some(entry) => entry.category,
        None => {
            tracing::warn!(
                pirep_id = %pirep.id,
                user_id = %pirep.user_id,
                "Approved PIREP has no ledger entry, resolving reversal category from current settings"
            );

            CategoryResolver::new(txn)
                .resolve(pirep.user_id, pirep.aircraft_id)
                .await?
        }
    };

    LedgerService::new(txn)
        .append(
            NewLedgerEntry::new(
                pirep.user_id,
                -pirep.flight_time,
                category,
                FlightTimeSourceType::PirepAdjustment,
            )
            .with_pirep(pirep.id)
            .with_note(note),
        )
        .await?;

    Ok(())
}
