//! Rankup trigger.
//!
//! Invoked after a pilot's career minutes change. The rank check and notification run on a
//! detached task: the caller never waits on it and never sees its failures. Notifications are
//! at-most-once and are lost if the process stops before the task runs.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    data::rank::RankRepository, error::Error, model::rankup::RankupNotification,
    service::eligibility::resolve_rank_for_minutes,
};

/// Career minute change to evaluate once the triggering transaction has committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerChange {
    pub user_id: i32,
    pub previous_minutes: i64,
    pub new_minutes: i64,
}

#[derive(Clone)]
pub struct RankupTrigger {
    db: DatabaseConnection,
    sender: UnboundedSender<RankupNotification>,
}

impl RankupTrigger {
    /// Creates a new instance of [`RankupTrigger`] publishing to `sender`.
    pub fn new(db: DatabaseConnection, sender: UnboundedSender<RankupNotification>) -> Self {
        Self { db, sender }
    }

    /// Schedule a rank check for a career minute change without waiting for it.
    ///
    /// Changes that do not increase career minutes are ignored.
    pub fn schedule(&self, change: CareerChange) {
        if change.new_minutes <= change.previous_minutes {
            return;
        }

        let db = self.db.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            match check_rankup(&db, change).await {
                Ok(Some(notification)) => {
                    tracing::info!(
                        user_id = %notification.user_id,
                        previous_rank_id = ?notification.previous_rank_id,
                        new_rank_id = %notification.new_rank_id,
                        "Pilot reached a new rank"
                    );

                    if sender.send(notification).is_err() {
                        tracing::error!(
                            user_id = %change.user_id,
                            "Rankup listener is closed, notification dropped"
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(
                        user_id = %change.user_id,
                        "Failed to evaluate rankup: {}",
                        e
                    );
                }
            }
        });
    }
}

/// Compare the ranks matching the minutes before and after a change.
async fn check_rankup(
    db: &DatabaseConnection,
    change: CareerChange,
) -> Result<Option<RankupNotification>, Error> {
    let ranks = RankRepository::new(db).get_all().await?;

    let previous_rank_id = resolve_rank_for_minutes(&ranks, change.previous_minutes).map(|r| r.id);
    let Some(new_rank) = resolve_rank_for_minutes(&ranks, change.new_minutes) else {
        return Ok(None);
    };

    if previous_rank_id == Some(new_rank.id) {
        return Ok(None);
    }

    Ok(Some(RankupNotification {
        user_id: change.user_id,
        previous_rank_id,
        new_rank_id: new_rank.id,
        previous_minutes: change.previous_minutes,
        new_minutes: change.new_minutes,
    }))
}
