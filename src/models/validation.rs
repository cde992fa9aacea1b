// Input validation errors for create/update payloads

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most {max} characters, got {len}")]
    NameTooLong { len: usize, max: usize },
    #[error("birth date {0} is in the future")]
    BirthDateInFuture(chrono::NaiveDate),
    #[error("amount must be between {min} and {max} ml, got {got}")]
    AmountOutOfRange { got: u32, min: u32, max: u32 },
    #[error("notes must be at most {max} characters, got {len}")]
    NoteTooLong { len: usize, max: usize },
    #[error("reminder interval must be between {min} and {max} hours, got {got}")]
    IntervalOutOfRange { got: u32, min: u32, max: u32 },
}
