//! Whole-form walkthrough: filling in a checkout form keystroke by keystroke.
//!
//! Run with: `cargo run --example checkout_form`

use payment_form::{Field, PaymentForm, ReferenceDate};

fn main() {
    println!("=== Checkout Form Walkthrough ===\n");

    let today = ReferenceDate::now();
    let mut form = PaymentForm::new(today);

    println!(
        "Reference date: {:02}/{}\n",
        today.month(),
        today.year()
    );

    // -------------------------------------------------------------------------
    // Typing the card number
    // -------------------------------------------------------------------------
    println!("--- Card number, keystroke by keystroke ---\n");

    let card = "4242424242424242";
    for end in [1, 4, 5, 9, 13, 16] {
        let display = form.input(Field::Number, &card[..end]).value().to_owned();
        println!(
            "  typed {:>2} digits -> display {:<21} submittable: {}",
            end,
            format!("{:?}", display),
            form.is_submittable()
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Remaining fields
    // -------------------------------------------------------------------------
    println!("--- Remaining fields ---\n");

    let entries = [
        (Field::Expiry, "1230"),
        (Field::Cvv, "123"),
        (Field::Name, "Ada Lovelace"),
    ];

    for (field, raw) in entries {
        let state = form.input(field, raw);
        match state.error() {
            None => println!("  {}: {:?} - ok", field, state.value()),
            Some(e) => println!("  {}: {:?} - {}", field, state.value(), e),
        }
    }

    println!("\nForm submittable: {}\n", form.is_submittable());

    // -------------------------------------------------------------------------
    // A correction round trip
    // -------------------------------------------------------------------------
    println!("--- Correction round trip ---\n");

    form.input(Field::Cvv, "12");
    println!("  CVV shortened to \"12\"");
    for (field, error) in form.errors() {
        println!("    error on {}: {}", field, error);
    }
    println!("  submittable: {}", form.is_submittable());

    form.input(Field::Cvv, "123");
    println!("  CVV fixed to \"123\"");
    println!("  submittable: {}", form.is_submittable());
}
