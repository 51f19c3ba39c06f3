//! Fuzz target for the whole-form aggregate.
//!
//! Drives a form with arbitrary input for every field and checks the
//! aggregate invariant.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payment_form::{Field, PaymentForm, ReferenceDate};

fuzz_target!(|data: (&str, &str, &str, &str)| {
    let (card, exp, cvv, name) = data;
    let today = ReferenceDate::now();

    let mut form = PaymentForm::new(today);
    form.input(Field::Number, card);
    form.input(Field::Expiry, exp);
    form.input(Field::Cvv, cvv);
    form.input(Field::Name, name);

    // Submittable means no field is empty or in error
    let submittable = form.is_submittable();
    let any_empty = Field::ALL.iter().any(|&f| form.value(f).is_empty());
    let errors = form.errors();
    assert_eq!(submittable, !any_empty && errors.is_empty());

    // Debug output never shows the full card digits
    let debug = format!("{:?}", form.field(Field::Number));
    let digits: String = card.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > 4 {
        assert!(!debug.contains(&digits));
    }
});
