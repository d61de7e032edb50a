//! Error types for the logbook engine.
//!
//! Every operation returns the unified [`Error`], which aggregates the domain errors of each
//! component and the storage errors passed through from SeaORM. Callers that need a coarse
//! classification (to choose an HTTP status, a CLI exit code, or whether to retry) use
//! [`Error::kind`] and [`Error::to_retry_strategy`] instead of matching every variant.

pub mod config;
pub mod eligibility;
pub mod ledger;
pub mod pirep;
pub mod retry;
pub mod type_rating;

use thiserror::Error;

use crate::error::{
    config::ConfigError, eligibility::EligibilityError, ledger::LedgerError, pirep::PirepError,
    type_rating::TypeRatingError,
};

/// Main error type for the logbook engine.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// PIREP lifecycle error (missing report, forbidden transition, detected race).
    #[error(transparent)]
    PirepError(#[from] PirepError),
    /// Ledger append rejected.
    #[error(transparent)]
    LedgerError(#[from] LedgerError),
    /// Type rating assignment error (unknown rating or user, duplicate relation).
    #[error(transparent)]
    TypeRatingError(#[from] TypeRatingError),
    /// Eligibility resolution error (unknown user).
    #[error(transparent)]
    EligibilityError(#[from] EligibilityError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the logbook's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error in the logbook engine, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Audit event payload could not be serialized.
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Coarse classification of an [`Error`] for calling collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A PIREP, user, aircraft or type rating does not exist.
    NotFound,
    /// The acting identity lacks the role or ownership required.
    Forbidden,
    /// The request is well formed but not valid for the current state.
    InvalidState,
    /// A concurrent transition was detected; the caller may retry.
    Conflict,
    /// The datastore failed.
    StorageFailure,
    /// Bug or misconfiguration inside the engine.
    Internal,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PirepError(err) => err.kind(),
            Self::LedgerError(_) => ErrorKind::InvalidState,
            Self::TypeRatingError(err) => err.kind(),
            Self::EligibilityError(_) => ErrorKind::NotFound,
            Self::DbErr(_) => ErrorKind::StorageFailure,
            Self::ConfigError(_)
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::SerializationError(_) => ErrorKind::Internal,
        }
    }
}
