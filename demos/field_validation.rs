//! Per-field validation example.
//!
//! Run with: `cargo run --example field_validation`

use payment_form::{cvv, expiry, mask, name, number, ReferenceDate};

fn main() {
    println!("=== Field Validation ===\n");

    // -------------------------------------------------------------------------
    // Card number
    // -------------------------------------------------------------------------
    println!("--- Card number ---\n");

    let numbers = [
        "4242424242424242",
        "4242-4242-4242-4242",
        "1234",
        "12345678901234567890",
        "",
    ];

    for raw in numbers {
        let formatted = number::format_card_number(raw);
        match number::validate_card_number(&formatted) {
            Ok(()) => println!("  {:?} -> {:?} - valid", raw, formatted),
            Err(e) => println!("  {:?} -> {:?} - {}", raw, formatted, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Expiry date
    // -------------------------------------------------------------------------
    println!("--- Expiry date ---\n");

    let today = ReferenceDate::now();
    let dates = ["1230", "12/30", "0520", "1325", "1", ""];

    for raw in dates {
        let formatted = expiry::format_expiry(raw);
        match expiry::validate_expiry(&formatted, today) {
            Ok(exp) => println!("  {:?} -> {:?} - valid until {}", raw, formatted, exp),
            Err(e) => println!("  {:?} -> {:?} - {}", raw, formatted, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // CVV
    // -------------------------------------------------------------------------
    println!("--- CVV ---\n");

    for raw in ["123", "1234", "12", "12345", ""] {
        match cvv::validate_cvv(raw) {
            Ok(validated) => println!("  {:?}: valid ({} digits)", raw, validated.length()),
            Err(e) => println!("  {:?}: {}", raw, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Cardholder name
    // -------------------------------------------------------------------------
    println!("--- Cardholder name ---\n");

    for raw in ["Ada Lovelace", "A", "   ", ""] {
        match name::validate_cardholder_name(raw) {
            Ok(()) => println!("  {:?}: valid", raw),
            Err(e) => println!("  {:?}: {}", raw, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Saved card display
    // -------------------------------------------------------------------------
    println!("--- Saved card display ---\n");

    let saved = "4242424242424211";
    println!("  masked:    {}", mask::mask_card_number(saved));
    println!("  last four: {}", mask::last_four(saved));
}
