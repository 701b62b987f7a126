use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("attendee identifier must not be blank (got {0:?})")]
    InvalidAttendeeId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
