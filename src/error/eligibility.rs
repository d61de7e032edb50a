use thiserror::Error;

#[derive(Error, Debug)]
pub enum EligibilityError {
    #[error("User ID {0} not found while resolving allowed aircraft")]
    UserNotFound(i32),
}
