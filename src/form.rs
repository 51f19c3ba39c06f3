//! Form-level state for the payment input fields.
//!
//! Each keystroke replaces the owning field's state with a freshly computed
//! `{formatted value, error}` pair; the validators themselves hold no state.
//! The aggregate [`PaymentForm`] keeps one entry per field and answers the
//! single question the submit button cares about: is every field filled in
//! and error-free right now?
//!
//! # Example
//!
//! ```
//! use payment_form::form::{Field, PaymentForm};
//! use payment_form::expiry::ReferenceDate;
//!
//! let today = ReferenceDate::new(2025, 6).unwrap();
//! let mut form = PaymentForm::new(today);
//! assert!(!form.is_submittable());
//!
//! form.input(Field::Number, "4242424242424242");
//! form.input(Field::Expiry, "1230");
//! form.input(Field::Cvv, "123");
//! form.input(Field::Name, "Ada Lovelace");
//!
//! assert_eq!(form.value(Field::Number), "4242 4242 4242 4242");
//! assert!(form.is_submittable());
//!
//! form.input(Field::Cvv, "12");
//! assert!(!form.is_submittable());
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use zeroize::Zeroize;

use crate::cvv::{self, CvvError};
use crate::error::CardNumberError;
use crate::expiry::{self, ExpiryError, ReferenceDate};
use crate::name::{self, NameError};
use crate::number;

/// Identifies one of the four payment form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Field {
    /// The card number input.
    Number,
    /// The expiry date input.
    Expiry,
    /// The CVV input.
    Cvv,
    /// The cardholder name input.
    Name,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 4] = [Field::Number, Field::Expiry, Field::Cvv, Field::Name];

    /// Returns the wire name of the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number => "card_number",
            Self::Expiry => "expiry",
            Self::Cvv => "cvv",
            Self::Name => "cardholder_name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validation error from any of the four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldError {
    /// Card number validation failed.
    Number(CardNumberError),
    /// Expiry date validation failed.
    Expiry(ExpiryError),
    /// CVV validation failed.
    Cvv(CvvError),
    /// Cardholder name validation failed.
    Name(NameError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(e) => e.fmt(f),
            Self::Expiry(e) => e.fmt(f),
            Self::Cvv(e) => e.fmt(f),
            Self::Name(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<CardNumberError> for FieldError {
    fn from(e: CardNumberError) -> Self {
        Self::Number(e)
    }
}

impl From<ExpiryError> for FieldError {
    fn from(e: ExpiryError) -> Self {
        Self::Expiry(e)
    }
}

impl From<CvvError> for FieldError {
    fn from(e: CvvError) -> Self {
        Self::Cvv(e)
    }
}

impl From<NameError> for FieldError {
    fn from(e: NameError) -> Self {
        Self::Name(e)
    }
}

/// The current state of a single field: its display value and verdict.
///
/// Always produced by [`check_field`]; the value is the formatted display
/// string and the error reflects that exact value. The value is wiped from
/// memory when the state is dropped.
#[derive(Clone)]
pub struct FieldState {
    field: Field,
    value: String,
    error: Option<FieldError>,
}

impl FieldState {
    /// Returns which field this state belongs to.
    #[inline]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Returns the formatted display value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the validation error for the current value, if any.
    #[inline]
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Returns true if the display value is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns true if the current value passed validation.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Card number and CVV values are masked in debug output
        let shown = match self.field {
            Field::Number => crate::mask::mask_card_number(&self.value),
            Field::Cvv => "*".repeat(self.value.chars().count()),
            Field::Expiry | Field::Name => self.value.clone(),
        };
        f.debug_struct("FieldState")
            .field("field", &self.field)
            .field("value", &shown)
            .field("error", &self.error)
            .finish()
    }
}

impl Drop for FieldState {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Computes a field's new state from its latest raw input.
///
/// Pure: the same raw input and reference date always produce the same
/// state. The raw keystrokes are first formatted for display, then the
/// formatted value is validated, matching how the input element is wired.
///
/// # Example
///
/// ```
/// use payment_form::form::{check_field, Field};
/// use payment_form::expiry::ReferenceDate;
///
/// let today = ReferenceDate::new(2025, 6).unwrap();
///
/// let state = check_field(Field::Expiry, "1230", today);
/// assert_eq!(state.value(), "12/30");
/// assert!(state.is_valid());
///
/// let state = check_field(Field::Expiry, "0525", today);
/// assert_eq!(state.error().unwrap().to_string(), "card has expired (05/25)");
/// ```
pub fn check_field(field: Field, raw: &str, today: ReferenceDate) -> FieldState {
    let (value, error) = match field {
        Field::Number => {
            let value = number::format_card_number(raw);
            let error = number::validate_card_number(&value).err().map(Into::into);
            (value, error)
        }
        Field::Expiry => {
            let value = expiry::format_expiry(raw);
            let error = expiry::validate_expiry(&value, today)
                .err()
                .map(Into::into);
            (value, error)
        }
        Field::Cvv => {
            let value = cvv::format_cvv(raw);
            let error = cvv::validate_cvv(&value).err().map(Into::into);
            (value, error)
        }
        // No formatting transform: the raw input is preserved verbatim
        Field::Name => {
            let value = raw.to_owned();
            let error = name::validate_cardholder_name(&value).err().map(Into::into);
            (value, error)
        }
    };

    FieldState {
        field,
        value,
        error,
    }
}

/// Live state for the whole payment form.
///
/// Holds one [`FieldState`] per field, replaced wholesale on every call to
/// [`input`](PaymentForm::input), so submit-button enablement can track
/// validity keystroke by keystroke. The reference date for expiry checks
/// is injected once at construction.
#[derive(Debug, Clone)]
pub struct PaymentForm {
    today: ReferenceDate,
    fields: BTreeMap<Field, FieldState>,
}

impl PaymentForm {
    /// Creates a form with all four fields empty.
    ///
    /// Empty fields carry their "required" errors from the start; the form
    /// is not submittable until every field has been filled in validly.
    pub fn new(today: ReferenceDate) -> Self {
        let fields = Field::ALL
            .iter()
            .map(|&field| (field, check_field(field, "", today)))
            .collect();
        Self { today, fields }
    }

    /// Returns the reference date used for expiry validation.
    #[inline]
    pub const fn today(&self) -> ReferenceDate {
        self.today
    }

    /// Applies the latest raw input for a field, replacing its state.
    ///
    /// Returns the freshly computed state so the caller can update the
    /// input element and its error hint in one go.
    pub fn input(&mut self, field: Field, raw: &str) -> &FieldState {
        let state = check_field(field, raw, self.today);
        match self.fields.entry(field) {
            Entry::Occupied(mut slot) => {
                slot.insert(state);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(state),
        }
    }

    /// Returns the current state of a field.
    pub fn field(&self, field: Field) -> &FieldState {
        match self.fields.get(&field) {
            Some(state) => state,
            // The map is seeded with every field at construction
            None => unreachable!("form state missing field {}", field),
        }
    }

    /// Returns the formatted display value of a field.
    #[inline]
    pub fn value(&self, field: Field) -> &str {
        self.field(field).value()
    }

    /// Returns the current error of a field, if any.
    #[inline]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.field(field).error()
    }

    /// Returns the fields currently in error, with their errors.
    ///
    /// Fields absent from the map have no error.
    pub fn errors(&self) -> BTreeMap<Field, &FieldError> {
        self.fields
            .iter()
            .filter_map(|(&field, state)| state.error().map(|e| (field, e)))
            .collect()
    }

    /// Returns true when the form can be submitted.
    ///
    /// Every field must hold a non-empty formatted value and no field may
    /// have a recorded error.
    pub fn is_submittable(&self) -> bool {
        Field::ALL.iter().all(|&field| {
            let state = self.field(field);
            !state.is_empty() && state.is_valid()
        })
    }
}
