//! Locale-sensitive number formatting.
//!
//! Converts IEEE-754 doubles into display strings following regional
//! conventions, in five styles: decimal, currency, percent, scientific,
//! and compact notation.
//!
//! ```
//! use numfmt::{FormatOptions, Formatter, Style};
//!
//! let formatter = Formatter::new(FormatOptions::default().with_locale("en"));
//! assert_eq!(formatter.format(1234567.89), "1,234,567.89");
//!
//! let percent = Formatter::new(
//!     FormatOptions::default()
//!         .with_locale("en")
//!         .with_style(Style::Percent),
//! );
//! assert_eq!(percent.format(0.1567), "15.67%");
//! ```

pub mod formatter;
pub mod locale;
pub mod options;
pub mod pattern;
pub mod system;

pub use formatter::Formatter;
pub use locale::{
    CompactBracket, CompactPattern, CurrencyData, LocaleCatalog, LocaleData,
    is_locale_supported, normalize_locale_id, supported_locales,
};
pub use options::{
    CompactDisplay, CurrencyDisplay, FormatOptions, RoundingMode, SignDisplay, Style,
};

/// Formats a value with default options and the host locale.
pub fn format(value: f64) -> String {
    Formatter::new(FormatOptions::default()).format(value)
}

/// Formats an integer with default options and the host locale.
pub fn format_int(value: i64) -> String {
    Formatter::new(FormatOptions::default()).format_int(value)
}

/// Formats a value as currency in the host locale.
///
/// # Examples
/// ```
/// let result = numfmt::Formatter::new(
///     numfmt::FormatOptions::default()
///         .with_locale("en")
///         .with_currency("USD"),
/// )
/// .format(1234.56);
/// assert_eq!(result, "$1,234.56");
/// ```
pub fn format_currency(value: f64, currency: &str) -> String {
    Formatter::new(FormatOptions::default().with_currency(currency)).format(value)
}

/// Formats a value as a percentage in the host locale.
pub fn format_percent(value: f64) -> String {
    Formatter::new(FormatOptions::default().with_style(Style::Percent)).format(value)
}

/// Formats a value in compact notation in the host locale.
pub fn format_compact(value: f64) -> String {
    Formatter::new(FormatOptions::default().with_style(Style::Compact)).format(value)
}

/// Formats a value in scientific notation in the host locale.
pub fn format_scientific(value: f64) -> String {
    Formatter::new(FormatOptions::default().with_style(Style::Scientific)).format(value)
}

/// Formats a value in an explicit locale.
pub fn format_with_locale(value: f64, locale: &str) -> String {
    Formatter::new(FormatOptions::default().with_locale(locale)).format(value)
}

/// Formats a value with an explicit fraction-digit range, in the host
/// locale.
pub fn format_precise(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    Formatter::new(FormatOptions::default().with_precision(min_fraction, max_fraction))
        .format(value)
}
