//! Library error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Trial count was zero, negative or not an integer.
    #[error("trial count must be a positive integer (got {0:?})")]
    InvalidTrialCount(String),

    #[error("Invalid request: {0:?}")]
    InvalidSelection(String),

    #[error("door label must be 1, 2 or 3 (got {0})")]
    InvalidDoor(u8),

    #[error("fraction denominator must be non-zero")]
    ZeroDenominator,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
