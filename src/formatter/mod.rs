//! The formatter facade and its five style pipelines.
//!
//! A `Formatter` binds one resolved option set to one locale record and is
//! immutable from then on: every `format` call is a pure function of the
//! input value, safe for unsynchronized concurrent use.

mod decompose;
mod rounding;
mod shape;

use std::sync::Arc;

use crate::locale::{self, CompactBracket, LocaleCatalog, LocaleData};
use crate::options::{CompactDisplay, CurrencyDisplay, FormatOptions, Style};
use crate::pattern::Substitutions;
use crate::system;

/// Locale-sensitive number formatter.
///
/// # Examples
/// ```
/// use numfmt::{FormatOptions, Formatter};
///
/// let formatter = Formatter::new(FormatOptions::default().with_locale("en"));
/// assert_eq!(formatter.format(1234567.89), "1,234,567.89");
/// ```
pub struct Formatter {
    options: FormatOptions,
    locale: Arc<LocaleData>,
}

impl Formatter {
    /// Builds a formatter against the process-wide locale catalog. A
    /// missing locale option falls back to the host environment's locale.
    pub fn new(options: FormatOptions) -> Self {
        Formatter::with_catalog(locale::default_catalog(), options)
    }

    /// Builds a formatter against an explicitly supplied catalog.
    pub fn with_catalog(catalog: &LocaleCatalog, mut options: FormatOptions) -> Self {
        if options.minimum_fraction_digits > options.maximum_fraction_digits {
            options.minimum_fraction_digits = options.maximum_fraction_digits;
        }
        let locale_id = match &options.locale {
            Some(id) => id.clone(),
            None => system::system_locale(),
        };
        let locale = catalog.lookup(&locale_id);
        Formatter { options, locale }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn locale(&self) -> &LocaleData {
        &self.locale
    }

    /// Formats a value according to the configured style.
    ///
    /// Never fails: unknown locales, unknown currency codes, and special
    /// values all degrade to defined output.
    ///
    /// # Arguments
    /// * `value` - The number to format
    ///
    /// # Returns
    /// * `String` - The formatted number
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value == f64::INFINITY {
            return "∞".to_string();
        }
        if value == f64::NEG_INFINITY {
            return "-∞".to_string();
        }

        match self.options.style {
            Style::Decimal => self.format_decimal(value),
            Style::Currency => self.format_currency(value),
            Style::Percent => self.format_percent(value),
            Style::Scientific => self.format_scientific(value),
            Style::Compact => self.format_compact(value),
        }
    }

    /// Formats an integer value.
    pub fn format_int(&self, value: i64) -> String {
        self.format(value as f64)
    }

    fn format_decimal(&self, value: f64) -> String {
        if decompose::is_very_small(value) {
            return self.format_very_small(value);
        }

        let glyph = shape::resolve_sign(value, self.options.sign_display, &self.locale);
        let rounded = rounding::round_magnitude(
            value.abs(),
            self.options.maximum_fraction_digits,
            self.options.rounding_mode,
        );
        let body = self.shape_magnitude(
            rounded,
            self.options.minimum_fraction_digits,
            self.options.maximum_fraction_digits,
        );
        shape::wrap_sign(&body, glyph, self.options.sign_display, &self.locale)
    }

    /// Decimal rendering of an already-rounded magnitude, without sign
    /// decoration. Shared by every pipeline.
    fn shape_magnitude(&self, rounded: f64, min_fraction: usize, max_fraction: usize) -> String {
        let (int_part, frac_part) = decompose::decompose(rounded);
        let int_part = shape::pad_integer(&int_part, self.options.minimum_integer_digits);
        let int_part = if self.options.use_grouping {
            shape::group_digits(&int_part, &self.locale.group_separator)
        } else {
            int_part
        };
        let frac_part = shape::shape_fraction(
            &frac_part,
            min_fraction,
            max_fraction,
            self.options.trim_trailing_zeros,
        );
        shape::assemble(int_part, frac_part, &self.locale.decimal_separator)
    }

    /// Fixed-point rendering for magnitudes the rounding scale would
    /// flatten to zero.
    fn format_very_small(&self, value: f64) -> String {
        if decompose::is_extremely_small(value) {
            return self.format_scientific(value);
        }

        let glyph = shape::resolve_sign(value, self.options.sign_display, &self.locale);
        let (int_part, frac_part) =
            decompose::decompose_very_small(value.abs(), self.options.maximum_fraction_digits);
        let int_part = if self.options.use_grouping {
            shape::group_digits(&int_part, &self.locale.group_separator)
        } else {
            int_part
        };
        let frac_part = shape::shape_fraction(
            &frac_part,
            self.options.minimum_fraction_digits,
            self.options.maximum_fraction_digits,
            self.options.trim_trailing_zeros,
        );
        let body = shape::assemble(int_part, frac_part, &self.locale.decimal_separator);
        shape::wrap_sign(&body, glyph, self.options.sign_display, &self.locale)
    }

    fn format_currency(&self, value: f64) -> String {
        let number = self.format_decimal(value);
        let Some(code) = self.options.currency.as_deref() else {
            return number;
        };
        let Some(currency) = self.locale.currencies.get(code) else {
            // Unknown code: literal concatenation, no decoration.
            return format!("{}{}", code, number);
        };

        let display = match self.options.currency_display {
            CurrencyDisplay::Symbol => currency.symbol.as_str(),
            CurrencyDisplay::Code => code,
            CurrencyDisplay::Name => currency.name.as_str(),
        };
        currency.template.expand(&Substitutions {
            number: &number,
            symbol: display,
            code,
            ..Default::default()
        })
    }

    fn format_percent(&self, value: f64) -> String {
        let number = self.format_decimal(value * 100.0);
        self.locale.percent_template.expand(&Substitutions {
            number: &number,
            symbol: &self.locale.percent_symbol,
            ..Default::default()
        })
    }

    fn format_scientific(&self, value: f64) -> String {
        if value == 0.0 {
            return format!("0{}0", self.locale.exponent_marker);
        }

        let glyph = shape::resolve_sign(value, self.options.sign_display, &self.locale);
        let mut magnitude = value.abs();
        let mut exponent = 0i32;
        if magnitude >= 1.0 {
            while magnitude >= 10.0 {
                magnitude /= 10.0;
                exponent += 1;
            }
        } else {
            while magnitude < 1.0 {
                magnitude *= 10.0;
                exponent -= 1;
            }
        }

        let mantissa = rounding::round_magnitude(
            magnitude,
            self.options.maximum_fraction_digits,
            self.options.rounding_mode,
        );
        let mantissa = self.shape_magnitude(
            mantissa,
            self.options.minimum_fraction_digits,
            self.options.maximum_fraction_digits,
        );
        let body = format!("{}{}{}", mantissa, self.locale.exponent_marker, exponent);
        shape::wrap_sign(&body, glyph, self.options.sign_display, &self.locale)
    }

    fn format_compact(&self, value: f64) -> String {
        let magnitude = value.abs();
        let bracket = if magnitude >= 1e12 {
            CompactBracket::Trillion
        } else if magnitude >= 1e9 {
            CompactBracket::Billion
        } else if magnitude >= 1e6 {
            CompactBracket::Million
        } else if magnitude >= 1e3 {
            CompactBracket::Thousand
        } else {
            return self.format_decimal(value);
        };

        let glyph = shape::resolve_sign(value, self.options.sign_display, &self.locale);
        let precision = self.options.compact_precision;
        let quotient = rounding::round_magnitude(
            magnitude / bracket.divisor(),
            precision,
            self.options.rounding_mode,
        );
        let number = self.shape_magnitude(
            quotient,
            self.options.minimum_fraction_digits.min(precision),
            precision,
        );

        let body = match self.locale.compact_patterns.get(&bracket) {
            Some(pattern) => {
                let template = match self.options.compact_display {
                    CompactDisplay::Short => &pattern.short,
                    CompactDisplay::Long => &pattern.long,
                };
                template.expand(&Substitutions {
                    number: &number,
                    ..Default::default()
                })
            }
            // Bracket without a configured pattern: degrade to an empty
            // substitution rather than failing.
            None => String::new(),
        };
        shape::wrap_sign(&body, glyph, self.options.sign_display, &self.locale)
    }
}
