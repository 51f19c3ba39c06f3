//! Fuzz target for CVV and cardholder name validation.
//!
//! Tests that the CVV and name functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_form::{cvv, name};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = cvv::format_cvv(data);
    let _ = cvv::validate_cvv(data);
    let _ = cvv::is_valid_cvv(data);
    let _ = name::validate_cardholder_name(data);
    let _ = name::is_valid_cardholder_name(data);

    // If validation succeeds, the masked output never leaks the digits
    if let Ok(validated) = cvv::validate_cvv(data) {
        let display = validated.to_string();
        assert!(display.chars().all(|c| c == '*'));
        assert_eq!(display.len(), validated.length());
    }
});
