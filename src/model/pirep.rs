use entity::sea_orm_active_enums::PirepEventAction;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::model::db::PirepModel;

/// Flight report as submitted by a pilot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPirep {
    pub aircraft_id: Option<i32>,
    /// Block time in minutes.
    pub flight_time: i32,
}

/// Status fields captured before and after a transition for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PirepEventValues {
    pub status: String,
    pub denied_reason: Option<String>,
}

impl From<&PirepModel> for PirepEventValues {
    fn from(pirep: &PirepModel) -> Self {
        Self {
            status: pirep.status.to_value(),
            denied_reason: pirep.denied_reason.clone(),
        }
    }
}

/// Audit event to record.
#[derive(Debug, Clone)]
pub struct NewPirepEvent {
    pub pirep_id: i32,
    pub action: PirepEventAction,
    pub performed_by: i32,
    pub reason: Option<String>,
    pub previous_values: Option<PirepEventValues>,
    pub new_values: Option<PirepEventValues>,
}
