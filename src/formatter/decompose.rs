//! Digit decomposition.
//!
//! Splits an already-rounded magnitude into exact base-10 integer and
//! fraction digit strings. The normal path uses the shortest decimal
//! representation that round-trips the binary value; magnitudes too small
//! for that to survive fixed-digit truncation go through an
//! extended-precision fixed-point expansion instead.

/// Below this magnitude the fixed-point expansion path takes over.
pub(crate) const VERY_SMALL_THRESHOLD: f64 = 1e-15;

/// Below this magnitude even the capped expansion cannot show a
/// significant digit; such values are rendered scientifically.
pub(crate) const EXTREMELY_SMALL_THRESHOLD: f64 = 1e-100;

/// Hard ceiling on expansion precision.
pub(crate) const MAX_EXPANSION_DIGITS: usize = 100;

/// Safety margin past the last requested digit.
const EXPANSION_GUARD_DIGITS: usize = 10;

pub(crate) fn is_very_small(value: f64) -> bool {
    value != 0.0 && value.abs() < VERY_SMALL_THRESHOLD
}

pub(crate) fn is_extremely_small(value: f64) -> bool {
    value != 0.0 && value.abs() < EXTREMELY_SMALL_THRESHOLD
}

/// Splits a rounded non-negative magnitude into integer and fraction digit
/// strings. `Display` for `f64` is positional and shortest-round-trip, so
/// no digits are invented or lost here.
pub(crate) fn decompose(magnitude: f64) -> (String, String) {
    if magnitude == 0.0 {
        return ("0".to_string(), String::new());
    }
    let repr = magnitude.to_string();
    match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (repr, String::new()),
    }
}

/// Fixed-point expansion for sub-threshold magnitudes.
///
/// Renders enough digits past the leading zero run that the first
/// significant digits survive a later cut to `max_fraction_digits`,
/// capped at [`MAX_EXPANSION_DIGITS`].
pub(crate) fn decompose_very_small(magnitude: f64, max_fraction_digits: usize) -> (String, String) {
    let precision = (max_fraction_digits + leading_fraction_zeros(magnitude) + EXPANSION_GUARD_DIGITS)
        .min(MAX_EXPANSION_DIGITS);
    let repr = format!("{magnitude:.precision$}");
    match repr.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (repr, String::new()),
    }
}

/// Count of zero digits between the decimal point and the first
/// significant digit, derived from the base-10 exponent by repeated
/// normalization (2.3e-51 has exponent -51 and 50 leading zeros).
pub(crate) fn leading_fraction_zeros(magnitude: f64) -> usize {
    if magnitude == 0.0 {
        return 0;
    }
    let mut m = magnitude.abs();
    if m >= 1.0 {
        return 0;
    }
    let mut count = 0usize;
    while m < 1.0 {
        m *= 10.0;
        count += 1;
    }
    count - 1
}
