//! # payment_form
//!
//! Input validation and formatting for subscription checkout forms.
//!
//! Everything here is synchronous, pure computation over strings: raw
//! keystrokes go in, a display-formatted value and a validation verdict
//! come out. Real payment validity (tokenization, checksum, fraud checks)
//! belongs to the payment processor; this crate is the presentation-layer
//! guard that keeps the submit button honest.
//!
//! ## Features
//!
//! - Card number grouping (`4242 4242 4242 4242`) with 13-19 digit checks
//! - Expiry `MM/YY` formatting with injected-date expiry validation
//! - CVV and cardholder name checks
//! - Whole-form submittability tracking, recomputed per keystroke
//! - Card number masking for saved-payment-method display
//!
//! ## Quick Start
//!
//! ```rust
//! use payment_form::{Field, PaymentForm, ReferenceDate};
//!
//! let today = ReferenceDate::new(2025, 6).unwrap();
//! let mut form = PaymentForm::new(today);
//!
//! form.input(Field::Number, "4242424242424242");
//! form.input(Field::Expiry, "1230");
//! form.input(Field::Cvv, "123");
//! form.input(Field::Name, "Ada Lovelace");
//!
//! assert_eq!(form.value(Field::Number), "4242 4242 4242 4242");
//! assert_eq!(form.value(Field::Expiry), "12/30");
//! assert!(form.is_submittable());
//!
//! // Errors are plain data, ready to render next to the input
//! form.input(Field::Cvv, "12");
//! assert!(!form.is_submittable());
//! let err = form.error(Field::Cvv).unwrap();
//! assert_eq!(err.to_string(), "CVV must have at least 3 digits, got 2");
//! ```
//!
//! ## Per-Field Use
//!
//! Each field's formatter and validator is also usable on its own:
//!
//! ```rust
//! use payment_form::{expiry, number, ReferenceDate};
//!
//! assert_eq!(number::format_card_number("42424242"), "4242 4242");
//! assert!(number::validate_card_number("4242 4242 4242 4242").is_ok());
//!
//! let today = ReferenceDate::new(2025, 6).unwrap();
//! assert_eq!(expiry::format_expiry("1225"), "12/25");
//! assert!(expiry::validate_expiry("05/25", today).is_err());
//! ```
//!
//! ## Display Masking
//!
//! ```rust
//! use payment_form::mask;
//!
//! assert_eq!(mask::mask_card_number("4242424242424242"), "**** **** **** 4242");
//! assert_eq!(mask::last_four("4242 4242 4242 4211"), "4211");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` on field identifiers and validation errors |
//! | `wasm`  | WebAssembly bindings for browser checkout UIs |
//!
//! ## Security
//!
//! - Form state wipes card number and CVV values from memory on drop
//! - `Debug` output masks card numbers and CVVs
//! - No card data ever leaves this crate: no I/O, no network, no logging
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cvv;
pub mod error;
pub mod expiry;
pub mod form;
pub mod mask;
pub mod name;
pub mod number;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use cvv::{CvvError, ValidatedCvv};
pub use error::CardNumberError;
pub use expiry::{ExpiryDate, ExpiryError, ReferenceDate};
pub use form::{check_field, Field, FieldError, FieldState, PaymentForm};
pub use name::NameError;
pub use number::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
