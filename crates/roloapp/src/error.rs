use crate::store::RecordId;
use crate::validation::{Field, FieldValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Invalid {field}: {reason} ({})", .field.constraint())]
    Validation {
        field: Field,
        reason: FieldValidationError,
    },

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("This person already exists in the address book: {0}")]
    DuplicatePerson(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RoloError {
    pub fn validation(field: Field, reason: FieldValidationError) -> Self {
        RoloError::Validation { field, reason }
    }
}

pub type Result<T> = std::result::Result<T, RoloError>;
