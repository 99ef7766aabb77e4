//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field value validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Phone number must be 10 digits and consist of digits only: {0}")]
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    #[error("Invalid birthday format. Please use 'YYYY-MM-DD' format: {0}")]
    InvalidBirthday(String),
}
