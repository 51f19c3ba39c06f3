//! WebAssembly bindings for the payment form validators.
//!
//! This module provides JavaScript-friendly bindings so the checkout UI can
//! format and validate card input fields directly in the browser.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { format_card, check_card_number, FormHandle } from 'payment_form';
//!
//! await init();
//!
//! // Per-field checks
//! const result = check_card_number("4242424242424242");
//! console.log(result.value);  // "4242 4242 4242 4242"
//! console.log(result.valid);  // true
//!
//! // Whole-form tracking
//! const form = new FormHandle(2025, 6);
//! form.input("card_number", "4242424242424242");
//! form.input("expiry", "1230");
//! form.input("cvv", "123");
//! form.input("cardholder_name", "Ada Lovelace");
//! console.log(form.is_submittable());  // true
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::expiry::ReferenceDate;
use crate::form::{check_field, Field, PaymentForm};

/// Result of a single field check, returned to JavaScript.
#[wasm_bindgen]
pub struct FieldCheck {
    valid: bool,
    value: String,
    error: Option<String>,
}

#[wasm_bindgen]
impl FieldCheck {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

fn check_to_js(field: Field, raw: &str, today: ReferenceDate) -> FieldCheck {
    let state = check_field(field, raw, today);
    FieldCheck {
        valid: state.is_valid(),
        value: state.value().to_owned(),
        error: state.error().map(|e| e.to_string()),
    }
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    Field::ALL
        .iter()
        .copied()
        .find(|f| f.name() == name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown field: {}", name)))
}

/// Formats a card number with spaces.
///
/// # Example
/// ```javascript
/// format_card("4242424242424242")  // "4242 4242 4242 4242"
/// ```
#[wasm_bindgen]
pub fn format_card(input: &str) -> String {
    crate::number::format_card_number(input)
}

/// Formats an expiry date as MM/YY.
#[wasm_bindgen]
pub fn format_expiry(input: &str) -> String {
    crate::expiry::format_expiry(input)
}

/// Formats a CVV (digits only).
#[wasm_bindgen]
pub fn format_cvv(input: &str) -> String {
    crate::cvv::format_cvv(input)
}

/// Masks a card number, showing only the last 4 digits.
#[wasm_bindgen]
pub fn mask_card(input: &str) -> String {
    crate::mask::mask_card_number(input)
}

/// Formats and validates a card number.
#[wasm_bindgen]
pub fn check_card_number(input: &str) -> FieldCheck {
    check_to_js(Field::Number, input, ReferenceDate::now())
}

/// Formats and validates an expiry date against the given year/month.
///
/// # Example
/// ```javascript
/// const result = check_expiry("1230", 2025, 6);
/// console.log(result.value);  // "12/30"
/// console.log(result.valid);  // true
/// ```
#[wasm_bindgen]
pub fn check_expiry(input: &str, year: u16, month: u8) -> Result<FieldCheck, JsValue> {
    let today = ReferenceDate::new(year, month)
        .ok_or_else(|| JsValue::from_str(&format!("invalid month: {}", month)))?;
    Ok(check_to_js(Field::Expiry, input, today))
}

/// Formats and validates an expiry date against the system clock.
#[wasm_bindgen]
pub fn check_expiry_now(input: &str) -> FieldCheck {
    check_to_js(Field::Expiry, input, ReferenceDate::now())
}

/// Formats and validates a CVV.
#[wasm_bindgen]
pub fn check_cvv(input: &str) -> FieldCheck {
    check_to_js(Field::Cvv, input, ReferenceDate::now())
}

/// Validates a cardholder name.
#[wasm_bindgen]
pub fn check_cardholder_name(input: &str) -> FieldCheck {
    check_to_js(Field::Name, input, ReferenceDate::now())
}

/// Whole-form state handle for JavaScript.
///
/// Field names: `card_number`, `expiry`, `cvv`, `cardholder_name`.
#[wasm_bindgen]
pub struct FormHandle {
    inner: PaymentForm,
}

#[wasm_bindgen]
impl FormHandle {
    /// Creates a form with the given reference year/month for expiry checks.
    #[wasm_bindgen(constructor)]
    pub fn new(year: u16, month: u8) -> Result<FormHandle, JsValue> {
        let today = ReferenceDate::new(year, month)
            .ok_or_else(|| JsValue::from_str(&format!("invalid month: {}", month)))?;
        Ok(Self {
            inner: PaymentForm::new(today),
        })
    }

    /// Creates a form using the system clock as the reference date.
    pub fn with_current_date() -> FormHandle {
        Self {
            inner: PaymentForm::new(ReferenceDate::now()),
        }
    }

    /// Applies the latest raw input for a field and returns its new state.
    pub fn input(&mut self, field: &str, raw: &str) -> Result<FieldCheck, JsValue> {
        let field = parse_field(field)?;
        let state = self.inner.input(field, raw);
        Ok(FieldCheck {
            valid: state.is_valid(),
            value: state.value().to_owned(),
            error: state.error().map(|e| e.to_string()),
        })
    }

    /// Returns the formatted display value of a field.
    pub fn value(&self, field: &str) -> Result<String, JsValue> {
        Ok(self.inner.value(parse_field(field)?).to_owned())
    }

    /// Returns the current error message of a field, if any.
    pub fn error(&self, field: &str) -> Result<Option<String>, JsValue> {
        Ok(self
            .inner
            .error(parse_field(field)?)
            .map(|e| e.to_string()))
    }

    /// Returns true when every field is filled in and error-free.
    pub fn is_submittable(&self) -> bool {
        self.inner.is_submittable()
    }

    /// Returns the names of the fields currently in error.
    pub fn error_fields(&self) -> js_sys::Array {
        let fields = js_sys::Array::new();
        for field in self.inner.errors().keys() {
            fields.push(&JsValue::from_str(field.name()));
        }
        fields
    }
}
