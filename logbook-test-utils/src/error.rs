use thiserror::Error;

/// Error returned by test setup and fixtures.
///
/// Only storage errors are wrapped: this crate sits below `logbook` in the dependency graph, so
/// tests propagate fixture and repository failures with `?` and `unwrap()` the results of
/// `logbook` services.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
