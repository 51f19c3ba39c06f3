//! Fuzz target for card number formatting and validation.
//!
//! Tests that the card number functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_form::{mask, number};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = number::format_card_number(data);
    let _ = number::strip_spaces(data);
    let _ = number::validate_card_number(data);
    let _ = number::is_valid_card_number(data);
    let _ = mask::mask_card_number(data);
    let _ = mask::last_four(data);

    // Display output is bounded
    let formatted = number::format_card_number(data);
    assert!(formatted.len() <= 19, "display output must stay within 19 chars");

    // Formatting is a fixed point
    assert_eq!(
        number::format_card_number(&formatted),
        formatted,
        "formatting must be idempotent"
    );
});
