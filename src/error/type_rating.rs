use thiserror::Error;

use super::ErrorKind;

#[derive(Error, Debug)]
pub enum TypeRatingError {
    #[error("Type rating ID {0} not found")]
    NotFound(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("User ID {user_id} already holds type rating ID {type_rating_id}")]
    AlreadyHeld { user_id: i32, type_rating_id: i32 },
}

impl TypeRatingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyHeld { .. } => ErrorKind::InvalidState,
        }
    }
}
