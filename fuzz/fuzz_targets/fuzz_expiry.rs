//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry formatting and validation never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_form::expiry::{self, ReferenceDate};

fuzz_target!(|data: &str| {
    let today = ReferenceDate::now();

    // These should never panic
    let _ = expiry::format_expiry(data);
    let _ = expiry::parse_expiry(data);
    let _ = expiry::validate_expiry(data, today);
    let _ = expiry::is_expired_at(data, today);

    // If parsing succeeds, test the value type
    if let Ok(exp) = expiry::parse_expiry(data) {
        let _ = exp.is_expired_at(today);
        let _ = exp.to_string();
        assert!((1..=12).contains(&exp.month()));
    }

    // Formatting is a fixed point
    let formatted = expiry::format_expiry(data);
    assert_eq!(
        expiry::format_expiry(&formatted),
        formatted,
        "formatting must be idempotent"
    );
});
