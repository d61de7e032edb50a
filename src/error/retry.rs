use sea_orm::DbErr;

use super::{pirep::PirepError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures, lost races)
    Retry,
    /// Failed permanently (invalid request or state)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Lost a race against another transition, state is re-read on the next attempt
            Self::PirepError(PirepError::ConcurrentTransition(_)) => ErrorRetryStrategy::Retry,
            Self::PirepError(_) => ErrorRetryStrategy::Fail,

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Record not found/inserted/updated
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Domain errors - permanent failures (bad requests, missing data)
            Self::LedgerError(_) => ErrorRetryStrategy::Fail,
            Self::TypeRatingError(_) => ErrorRetryStrategy::Fail,
            Self::EligibilityError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Parse & serialization errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::SerializationError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug within the logbook's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
