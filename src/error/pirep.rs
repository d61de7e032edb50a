use thiserror::Error;

use super::ErrorKind;

#[derive(Error, Debug)]
pub enum PirepError {
    #[error("PIREP ID {0} not found")]
    NotFound(i32),
    #[error("PIREP IDs {0:?} not found, no PIREPs were updated")]
    BatchNotFound(Vec<i32>),
    #[error("No PIREP IDs were provided")]
    EmptyBatch,
    #[error("A reason is required when denying a PIREP")]
    DeniedReasonRequired,
    #[error("PIREP flight time must be a positive number of minutes, got {0}")]
    NonPositiveFlightTime(i32),
    #[error("Aircraft ID {0} not found")]
    AircraftNotFound(i32),
    #[error("User ID {user_id} is not allowed to fly aircraft ID {aircraft_id}")]
    AircraftNotAllowed { user_id: i32, aircraft_id: i32 },
    #[error("User ID {0} is not permitted to delete this PIREP")]
    DeleteNotPermitted(i32),
    #[error("User ID {0} is not permitted to change PIREP status")]
    StatusChangeNotPermitted(i32),
    #[error("PIREP ID {0} was modified by a concurrent transition")]
    ConcurrentTransition(i32),
}

impl PirepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::BatchNotFound(_) | Self::AircraftNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::AircraftNotAllowed { .. }
            | Self::DeleteNotPermitted(_)
            | Self::StatusChangeNotPermitted(_) => ErrorKind::Forbidden,
            Self::EmptyBatch | Self::DeniedReasonRequired | Self::NonPositiveFlightTime(_) => {
                ErrorKind::InvalidState
            }
            Self::ConcurrentTransition(_) => ErrorKind::Conflict,
        }
    }
}
