use crate::time::TimeParseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Phone number must be 10 digits")]
    InvalidPhone(String),
    #[error("Invalid date format. Use DD.MM.YYYY ({reason})")]
    InvalidBirthday {
        value: String,
        reason: TimeParseError,
    },
    #[error("invalid number of days: {0} (expected 0..=366)")]
    InvalidWindowDays(i64),
    #[error("Contact {0} not found.")]
    ContactNotFound(String),
    #[error("Old phone number {phone} not found for contact {name}.")]
    PhoneNotFound { name: String, phone: String },
    #[error("Contact {0} already exists.")]
    DuplicateContact(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptyName
            | CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday { .. }
            | CoreError::InvalidWindowDays(_) => ErrorKind::Validation,
            CoreError::ContactNotFound(_) | CoreError::PhoneNotFound { .. } => {
                ErrorKind::NotFound
            }
            CoreError::DuplicateContact(_) => ErrorKind::Conflict,
        }
    }
}
