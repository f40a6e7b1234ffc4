use serde::Serialize;
use thiserror::Error;

/// One failed field from payload validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request data")]
    Validation(Vec<FieldError>),

    #[error("This email is already on the waitlist")]
    DuplicateEmail,

    /// The storage layer rejected a write on a uniqueness constraint.
    /// Reaching this means the submit pre-check lost a race.
    #[error("Storage conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
