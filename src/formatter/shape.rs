//! Digit-string shaping and sign resolution.
//!
//! Pure helpers over digit strings: grouping, integer zero-padding,
//! fraction truncation/padding/trimming, assembly, and the sign glyph
//! rules shared by every pipeline.

use crate::locale::LocaleData;
use crate::options::SignDisplay;
use crate::pattern::Substitutions;

/// Inserts the group separator every three digits, counting from the
/// right; the leftmost group may be shorter.
pub(crate) fn group_digits(digits: &str, separator: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    let mut first = digits.len() % 3;
    if first == 0 {
        first = 3;
    }
    grouped.push_str(&digits[..first]);
    let mut idx = first;
    while idx < digits.len() {
        grouped.push_str(separator);
        grouped.push_str(&digits[idx..idx + 3]);
        idx += 3;
    }
    grouped
}

/// Left-pads the integer digit string with zeros up to `minimum`.
pub(crate) fn pad_integer(digits: &str, minimum: usize) -> String {
    if digits.len() >= minimum {
        digits.to_string()
    } else {
        format!("{}{}", "0".repeat(minimum - digits.len()), digits)
    }
}

/// Shapes the fraction digit string: cut to `maximum` (the value is
/// already rounded, so this is a pure length cut), pad to `minimum`, then
/// strip trailing zeros when trimming is on. Trimming runs last and may
/// undercut the minimum; callers rely on that ordering.
pub(crate) fn shape_fraction(fraction: &str, minimum: usize, maximum: usize, trim: bool) -> String {
    let mut frac = if fraction.is_empty() && minimum > 0 {
        "0".repeat(minimum)
    } else {
        fraction.to_string()
    };
    if frac.len() > maximum {
        frac.truncate(maximum);
    } else if frac.len() < minimum {
        let deficit = minimum - frac.len();
        frac.push_str(&"0".repeat(deficit));
    }
    if trim {
        let kept = frac.trim_end_matches('0').len();
        frac.truncate(kept);
    }
    frac
}

/// Joins integer and fraction parts; an empty fraction yields the integer
/// part alone.
pub(crate) fn assemble(integer: String, fraction: String, separator: &str) -> String {
    if fraction.is_empty() {
        integer
    } else {
        format!("{}{}{}", integer, separator, fraction)
    }
}

/// Resolves the sign glyph for a value. Negative values always take the
/// minus sign; the plus sign appears under `Always` (zero included) and
/// `ExceptZero` (strictly positive only). `Never` is enforced later, at
/// the wrap step.
pub(crate) fn resolve_sign<'a>(
    value: f64,
    display: SignDisplay,
    locale: &'a LocaleData,
) -> &'a str {
    if value < 0.0 {
        return locale.minus_sign.as_str();
    }
    match display {
        SignDisplay::Always => locale.plus_sign.as_str(),
        SignDisplay::ExceptZero if value > 0.0 => locale.plus_sign.as_str(),
        _ => "",
    }
}

/// Substitutes the number and its glyph into the matching sign template.
/// `Never` and an empty glyph both leave the number undecorated.
pub(crate) fn wrap_sign(
    number: &str,
    glyph: &str,
    display: SignDisplay,
    locale: &LocaleData,
) -> String {
    if display == SignDisplay::Never || glyph.is_empty() {
        return number.to_string();
    }
    let template = if glyph == locale.minus_sign {
        &locale.negative_template
    } else {
        &locale.positive_template
    };
    template.expand(&Substitutions {
        number,
        sign: glyph,
        ..Default::default()
    })
}
