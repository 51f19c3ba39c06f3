//! Cardholder name validation.
//!
//! The name field has no formatting transform: the raw input is preserved
//! verbatim for display, and validation works on the trimmed content.

use std::fmt;

/// Errors that can occur during cardholder name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NameError {
    /// The input is empty after trimming whitespace.
    Empty,
    /// The trimmed name is too short.
    TooShort {
        /// Actual number of characters after trimming.
        length: usize,
        /// The minimum required characters (2).
        minimum: usize,
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cardholder name is required"),
            Self::TooShort { minimum, .. } => {
                write!(f, "cardholder name must have at least {} characters", minimum)
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Validates a cardholder name.
///
/// Trims surrounding whitespace, then requires at least 2 characters.
/// The input itself is left untouched.
///
/// # Example
///
/// ```
/// use payment_form::name::validate_cardholder_name;
///
/// assert!(validate_cardholder_name("Ada Lovelace").is_ok());
/// assert!(validate_cardholder_name("A").is_err());
/// assert!(validate_cardholder_name("   ").is_err());
/// ```
pub fn validate_cardholder_name(input: &str) -> Result<(), NameError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }

    let length = trimmed.chars().count();
    if length < 2 {
        return Err(NameError::TooShort { length, minimum: 2 });
    }

    Ok(())
}

/// Checks if a string is a valid cardholder name.
#[inline]
pub fn is_valid_cardholder_name(input: &str) -> bool {
    validate_cardholder_name(input).is_ok()
}
