use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger entry for user ID {0} must carry a non-zero number of minutes")]
    ZeroMinutes(i32),
}
