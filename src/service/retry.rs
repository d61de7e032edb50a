//! Retry logic with exponential backoff for service operations.
//!
//! Status transitions re-read the PIREP inside their transaction and refuse to write when the
//! row changed underneath them. `RetryContext` re-runs such operations against fresh state so a
//! lost race resolves itself instead of surfacing to the caller, and it also absorbs transient
//! connection failures.

use std::{future::Future, pin::Pin, time::Duration};

use dioxus_logger::tracing;

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Boxed future returned by a retried operation.
pub type RetryFuture<'f, R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'f>>;

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 100 milliseconds (100ms, 200ms, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new();
/// let db = db.clone();
///
/// ctx.execute_with_retry("delete PIREP ID 12", || {
///     let db = db.clone();
///
///     Box::pin(async move {
///         let txn = db.begin().await?;
///         // ... read, guard, write ...
///         txn.commit().await?;
///
///         Ok(())
///     })
/// }).await?;
/// ```
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in milliseconds (doubles with each retry)
    initial_backoff_ms: u64,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_MS: u64 = 100;

    /// Creates a new retry context with 3 max attempts and 100 millisecond initial backoff.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: Self::DEFAULT_INITIAL_BACKOFF_MS,
        }
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// Every attempt calls `operation` again, so it must build its future from owned or cloned
    /// state and open its own transaction. Errors are evaluated using `to_retry_strategy()` to
    /// determine if they are retryable or permanent failures.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "approve PIREP ID 4")
    /// - `operation` - Function producing the boxed future to run for each attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<'f, R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> RetryFuture<'f, R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_ms = self.initial_backoff_ms * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_millis(backoff_ms);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use crate::error::{pirep::PirepError, Error, ErrorKind};

    use super::RetryContext;

    /// Expect a lost race to be retried until it succeeds
    #[tokio::test]
    async fn retries_conflict_until_success() {
        let attempts = Arc::new(AtomicU32::new(0));
        let ctx = RetryContext::new();

        let result = ctx
            .execute_with_retry("flaky transition", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        return Err(PirepError::ConcurrentTransition(1).into());
                    }
                    Ok(42)
                })
            })
            .await;

        assert!(matches!(result, Ok(42)));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Expect a permanent failure to return after the first attempt
    #[tokio::test]
    async fn does_not_retry_permanent_failure() {
        let attempts = Arc::new(AtomicU32::new(0));
        let ctx = RetryContext::new();

        let result: Result<(), Error> = ctx
            .execute_with_retry("forbidden delete", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(PirepError::DeleteNotPermitted(1).into())
                })
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::PirepError(PirepError::DeleteNotPermitted(1)))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    /// Expect the conflict to surface once attempts are exhausted
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let attempts = Arc::new(AtomicU32::new(0));
        let ctx = RetryContext::new();

        let result: Result<(), Error> = ctx
            .execute_with_retry("contended transition", || {
                let attempts = attempts.clone();
                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(PirepError::ConcurrentTransition(9).into())
                })
            })
            .await;

        assert!(matches!(
            &result,
            Err(Error::PirepError(PirepError::ConcurrentTransition(9)))
        ));
        assert!(matches!(
            result.map_err(|e| e.kind()),
            Err(ErrorKind::Conflict)
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
