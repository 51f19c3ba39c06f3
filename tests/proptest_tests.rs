//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use proptest::prelude::*;

use payment_form::{cvv, expiry, form::check_field, mask, name, number, Field, PaymentForm,
    ReferenceDate};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates a reference date with a valid month.
fn reference_date() -> impl Strategy<Value = ReferenceDate> {
    (2020u16..=2050, 1u8..=12).prop_map(|(year, month)| {
        ReferenceDate::new(year, month).expect("month is in range")
    })
}

// =============================================================================
// CARD NUMBER PROPERTIES
// =============================================================================

proptest! {
    /// Property: format then strip round-trips digit runs of 4-16 digits.
    #[test]
    fn format_roundtrip(digits in digit_string_range(4..=16)) {
        let formatted = number::format_card_number(&digits);
        let stripped = number::strip_spaces(&formatted);
        prop_assert_eq!(stripped, digits);
    }

    /// Property: formatted output contains only digits and single spaces.
    #[test]
    fn formatted_output_alphabet(input in ".*") {
        let formatted = number::format_card_number(&input);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
        prop_assert!(!formatted.contains("  "));
        prop_assert!(!formatted.starts_with(' '));
        prop_assert!(!formatted.ends_with(' '));
    }

    /// Property: formatted output never exceeds 19 characters.
    #[test]
    fn formatted_output_bounded(input in ".*") {
        prop_assert!(number::format_card_number(&input).len() <= 19);
    }

    /// Property: formatting is a fixed point.
    #[test]
    fn format_idempotent(input in ".*") {
        let once = number::format_card_number(&input);
        prop_assert_eq!(number::format_card_number(&once), once);
    }

    /// Property: digit strings of 13-19 digits validate, outside lengths fail.
    #[test]
    fn validation_follows_length(digits in digit_string_range(0..=30)) {
        let result = number::validate_card_number(&digits);
        let expected = (13..=19).contains(&digits.len());
        prop_assert_eq!(result.is_ok(), expected);
    }

    /// Property: validation ignores interleaved whitespace.
    #[test]
    fn validation_ignores_whitespace(digits in digit_string_range(13..=19)) {
        let spaced: String = digits
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        prop_assert!(number::validate_card_number(&spaced).is_ok());
    }
}

// =============================================================================
// EXPIRY PROPERTIES
// =============================================================================

proptest! {
    /// Property: four digits always format to MM/YY shape.
    #[test]
    fn expiry_format_shape(digits in digit_string(4)) {
        let formatted = expiry::format_expiry(&digits);
        prop_assert_eq!(formatted.len(), 5);
        prop_assert_eq!(formatted.chars().nth(2), Some('/'));
    }

    /// Property: expiry formatting is a fixed point.
    #[test]
    fn expiry_format_idempotent(input in ".*") {
        let once = expiry::format_expiry(&input);
        prop_assert_eq!(expiry::format_expiry(&once), once);
    }

    /// Property: valid months round-trip through format and parse.
    #[test]
    fn expiry_parse_roundtrip(month in 1u8..=12, yy in 0u16..=99) {
        let input = format!("{:02}{:02}", month, yy);
        let formatted = expiry::format_expiry(&input);
        let parsed = expiry::parse_expiry(&formatted).unwrap();
        prop_assert_eq!(parsed.month(), month);
        prop_assert_eq!(parsed.year(), 2000 + yy);
    }

    /// Property: out-of-range months are always rejected.
    #[test]
    fn expiry_invalid_month_rejected(
        month in prop_oneof![Just(0u8), 13u8..=99],
        yy in 0u16..=99,
        today in reference_date(),
    ) {
        let input = format!("{:02}/{:02}", month, yy);
        prop_assert!(expiry::validate_expiry(&input, today).is_err());
    }

    /// Property: the expired verdict agrees with (year, month) ordering.
    #[test]
    fn expired_iff_before_reference(
        month in 1u8..=12,
        yy in 0u16..=99,
        today in reference_date(),
    ) {
        let input = format!("{:02}/{:02}", month, yy);
        let year = 2000 + yy;
        let before = year < today.year() || (year == today.year() && month < today.month());
        prop_assert_eq!(expiry::is_expired_at(&input, today), before);
    }
}

// =============================================================================
// CVV AND NAME PROPERTIES
// =============================================================================

proptest! {
    /// Property: 3-4 digit strings validate, other digit counts fail.
    #[test]
    fn cvv_follows_length(digits in digit_string_range(0..=8)) {
        let result = cvv::validate_cvv(&digits);
        prop_assert_eq!(result.is_ok(), (3..=4).contains(&digits.len()));
    }

    /// Property: CVV formatting strips to digits only and is idempotent.
    #[test]
    fn cvv_format_idempotent(input in ".*") {
        let once = cvv::format_cvv(&input);
        prop_assert!(once.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(cvv::format_cvv(&once), once);
    }

    /// Property: the validated CVV preserves its digits in order.
    #[test]
    fn cvv_preserves_digits(digits in digit_string_range(3..=4)) {
        let validated = cvv::validate_cvv(&digits).unwrap();
        prop_assert_eq!(validated.as_str(), digits);
    }

    /// Property: names of 2+ trimmed chars are always accepted.
    #[test]
    fn name_accepts_two_or_more_chars(core in "[a-zA-Z]{2,30}", pad in " {0,5}") {
        let input = format!("{}{}{}", pad, core, pad);
        prop_assert!(name::validate_cardholder_name(&input).is_ok());
    }
}

// =============================================================================
// FORM AGGREGATE PROPERTIES
// =============================================================================

proptest! {
    /// Property: a form filled with valid values is always submittable,
    /// and corrupting any single field flips it to not-submittable.
    #[test]
    fn aggregate_flips_on_single_field(
        card in digit_string_range(13..=16),
        month in 1u8..=12,
        cvv_digits in digit_string_range(3..=4),
        corrupt in 0usize..4,
    ) {
        let today = ReferenceDate::new(2025, 6).expect("valid month");
        let mut form = PaymentForm::new(today);
        form.input(Field::Number, &card);
        form.input(Field::Expiry, &format!("{:02}40", month)); // year 2040
        form.input(Field::Cvv, &cvv_digits);
        form.input(Field::Name, "Ada Lovelace");
        prop_assert!(form.is_submittable());

        let field = Field::ALL[corrupt];
        form.input(field, "");
        prop_assert!(!form.is_submittable());
    }

    /// Property: check_field never panics on arbitrary input.
    #[test]
    fn check_field_total(input in ".*", today in reference_date()) {
        for field in Field::ALL {
            let state = check_field(field, &input, today);
            let _ = state.value();
            let _ = state.error();
            let _ = format!("{:?}", state);
        }
    }
}

// =============================================================================
// MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: masked output never contains more than the last 4 digits.
    #[test]
    fn mask_hides_all_but_last_four(digits in digit_string_range(5..=19)) {
        let masked = mask::mask_card_number(&digits);
        prop_assert!(!masked.contains(&digits));
        prop_assert!(masked.ends_with(&digits[digits.len() - 4..]));
        let digit_count = masked.chars().filter(|c| c.is_ascii_digit()).count();
        prop_assert_eq!(digit_count, 4);
    }

    /// Property: last_four returns exactly the trailing digits.
    #[test]
    fn last_four_is_suffix(digits in digit_string_range(4..=19)) {
        prop_assert_eq!(mask::last_four(&digits), &digits[digits.len() - 4..]);
    }
}
