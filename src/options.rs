//! Formatting options.
//!
//! `FormatOptions` collects every knob a formatter can be constructed with.
//! A default value mirrors the conventions of standard internationalization
//! APIs: grouping on, up to three fraction digits, banker's rounding.

/// Formatting style selecting one of the five output pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Plain localized number
    #[default]
    Decimal,
    /// Number wrapped in a currency template
    Currency,
    /// Number scaled by 100 and wrapped in the percent template
    Percent,
    /// Mantissa and base-10 exponent
    Scientific,
    /// Abbreviated notation for thousands and above
    Compact,
}

/// How the currency is rendered inside its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    /// Currency symbol, e.g. `$`
    #[default]
    Symbol,
    /// ISO 4217 code, e.g. `USD`
    Code,
    /// Localized display name, e.g. `US Dollar`
    Name,
}

/// Length of compact-notation patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactDisplay {
    /// Abbreviated pattern, e.g. `1.5M`
    #[default]
    Short,
    /// Spelled-out pattern, e.g. `1.5 million`
    Long,
}

/// When a plus or minus glyph is attached to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    /// Minus for negative values only
    #[default]
    Auto,
    /// Sign on every value, zero included
    Always,
    /// No sign decoration at all
    Never,
    /// Sign on every value except zero
    ExceptZero,
}

/// Tie-break policy applied when a value is rounded to its fraction-digit
/// budget. The engine operates on magnitudes, so "away from zero" and
/// "toward zero" describe the absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties to the even neighbor (banker's rounding)
    #[default]
    HalfEven,
    /// Ties away from zero
    HalfUp,
    /// Ties toward zero
    HalfDown,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Any nonzero remainder rounds away from zero
    Up,
    /// Truncation
    Down,
}

/// Options resolved into an immutable configuration when a
/// [`Formatter`](crate::Formatter) is constructed.
///
/// Fields are public; the `with_*` methods exist for call sites that prefer
/// a builder chain:
///
/// ```
/// use numfmt::{FormatOptions, Formatter};
///
/// let formatter = Formatter::new(
///     FormatOptions::default()
///         .with_locale("ru")
///         .with_precision(0, 2),
/// );
/// assert_eq!(formatter.format(1234567.89), "1 234 567,89");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Locale identifier; `None` means probe the host environment.
    pub locale: Option<String>,
    pub style: Style,
    /// ISO 4217 code used by the currency style; `None` leaves currency
    /// output undecorated.
    pub currency: Option<String>,
    pub currency_display: CurrencyDisplay,
    pub use_grouping: bool,
    pub minimum_integer_digits: usize,
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub rounding_mode: RoundingMode,
    pub compact_display: CompactDisplay,
    /// Fraction digits kept on the bracket quotient in compact notation.
    pub compact_precision: usize,
    pub sign_display: SignDisplay,
    pub trim_trailing_zeros: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            locale: None,
            style: Style::Decimal,
            currency: None,
            currency_display: CurrencyDisplay::Symbol,
            use_grouping: true,
            minimum_integer_digits: 1,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            rounding_mode: RoundingMode::HalfEven,
            compact_display: CompactDisplay::Short,
            compact_precision: 2,
            sign_display: SignDisplay::Auto,
            trim_trailing_zeros: true,
        }
    }
}

impl FormatOptions {
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the currency code and switches the style to [`Style::Currency`].
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self.style = Style::Currency;
        self
    }

    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = display;
        self
    }

    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    pub fn with_precision(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }

    /// Pins the fraction-digit count to exactly `precision`.
    pub fn with_fixed_precision(mut self, precision: usize) -> Self {
        self.minimum_fraction_digits = precision;
        self.maximum_fraction_digits = precision;
        self
    }

    pub fn with_integer_digits(mut self, digits: usize) -> Self {
        self.minimum_integer_digits = digits;
        self
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Sets the compact length and switches the style to [`Style::Compact`].
    pub fn with_compact_display(mut self, display: CompactDisplay) -> Self {
        self.compact_display = display;
        self.style = Style::Compact;
        self
    }

    pub fn with_compact_precision(mut self, precision: usize) -> Self {
        self.compact_precision = precision;
        self
    }

    pub fn with_sign_display(mut self, display: SignDisplay) -> Self {
        self.sign_display = display;
        self
    }

    pub fn with_trim_trailing_zeros(mut self, trim: bool) -> Self {
        self.trim_trailing_zeros = trim;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = FormatOptions::default();
        assert_eq!(options.style, Style::Decimal);
        assert!(options.use_grouping);
        assert_eq!(options.minimum_integer_digits, 1);
        assert_eq!(options.minimum_fraction_digits, 0);
        assert_eq!(options.maximum_fraction_digits, 3);
        assert_eq!(options.rounding_mode, RoundingMode::HalfEven);
        assert_eq!(options.compact_precision, 2);
        assert_eq!(options.sign_display, SignDisplay::Auto);
        assert!(options.trim_trailing_zeros);
    }

    #[test]
    fn with_currency_switches_style() {
        let options = FormatOptions::default().with_currency("EUR");
        assert_eq!(options.style, Style::Currency);
        assert_eq!(options.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn with_compact_display_switches_style() {
        let options = FormatOptions::default().with_compact_display(CompactDisplay::Long);
        assert_eq!(options.style, Style::Compact);
        assert_eq!(options.compact_display, CompactDisplay::Long);
    }
}
