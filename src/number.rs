//! Card number formatting and validation.
//!
//! This module formats card numbers for display as the user types and
//! validates the result with length checks only. It is a presentation-layer
//! guard: real payment validity is decided by the payment processor after
//! tokenization, so no checksum is computed here.
//!
//! # Formatting Contract
//!
//! - All whitespace and non-digit characters are stripped.
//! - The first run of 4–16 consecutive digits is grouped in fours,
//!   joined by single spaces.
//! - With fewer than 4 digits, the stripped digits are returned as-is.
//! - Output never exceeds 19 characters (16 digits + 3 separators).
//!
//! # Example
//!
//! ```
//! use payment_form::number::{format_card_number, validate_card_number};
//!
//! assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
//! assert_eq!(format_card_number("4242-4242"), "4242 4242");
//!
//! assert!(validate_card_number("4242 4242 4242 4242").is_ok());
//! assert!(validate_card_number("1234").is_err());
//! ```

use crate::error::CardNumberError;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Most digits the display format will show (16 digits in groups of 4).
const MAX_DISPLAY_DIGITS: usize = 16;

/// Formats a card number for display as the user types.
///
/// Strips everything that is not a digit, then groups the first run of
/// 4–16 digits in fours separated by single spaces. Inputs with fewer than
/// 4 digits come back unchanged apart from the stripping, so partial
/// entries stay editable.
///
/// # Example
///
/// ```
/// use payment_form::number::format_card_number;
///
/// assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("42424"), "4242 4");
/// assert_eq!(format_card_number("424"), "424");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return digits.into_iter().collect();
    }

    let take = digits.len().min(MAX_DISPLAY_DIGITS);
    let mut result = String::with_capacity(take + take / 4);

    for (i, c) in digits[..take].iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(*c);
    }

    result
}

/// Strips all whitespace from a formatted card number.
///
/// Inverse of [`format_card_number`] for display values: stripping a
/// formatted value yields the digit run that was grouped.
///
/// # Example
///
/// ```
/// use payment_form::number::strip_spaces;
///
/// assert_eq!(strip_spaces("4242 4242 4242 4242"), "4242424242424242");
/// ```
pub fn strip_spaces(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates a card number string.
///
/// Operates on the value with whitespace removed, so formatted display
/// values can be passed directly. The only checks are presence and length
/// bounds (13–19 digits); no checksum is performed.
///
/// # Example
///
/// ```
/// use payment_form::number::validate_card_number;
/// use payment_form::CardNumberError;
///
/// assert!(validate_card_number("4242 4242 4242 4242").is_ok());
///
/// let err = validate_card_number("1234").unwrap_err();
/// assert_eq!(err, CardNumberError::TooShort { length: 4, minimum: 13 });
/// ```
pub fn validate_card_number(input: &str) -> Result<(), CardNumberError> {
    let length = input.chars().filter(|c| !c.is_whitespace()).count();

    if length == 0 {
        return Err(CardNumberError::Empty);
    }

    if length < MIN_CARD_DIGITS {
        return Err(CardNumberError::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if length > MAX_CARD_DIGITS {
        return Err(CardNumberError::TooLong {
            length,
            maximum: MAX_CARD_DIGITS,
        });
    }

    Ok(())
}

/// Quickly checks whether a card number passes validation.
#[inline]
pub fn is_valid_card_number(input: &str) -> bool {
    validate_card_number(input).is_ok()
}
