//! Locale data and its catalog.
//!
//! Locale records are loaded once from embedded TOML (a `[base]` table plus
//! per-locale overrides) and shared immutably. The catalog resolves
//! arbitrary locale identifiers to a record through a normalization and
//! fallback chain that always terminates at the default locale, caching
//! each resolution behind a read-mostly lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::pattern::Template;

const LOCALES_TOML: &str = include_str!("locales.toml");
const CURRENCIES_TOML: &str = include_str!("currencies.toml");

/// Locale every fallback chain ends at.
pub const DEFAULT_LOCALE: &str = "en";

/// Error type for embedded locale-data loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The TOML document itself could not be parsed
    Parse(String),
    /// The document parsed but a table or field had the wrong shape
    Data(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Parse(msg) => write!(f, "error parsing locale data: {}", msg),
            LocaleError::Data(msg) => write!(f, "malformed locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Formatting conventions for one locale. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct LocaleData {
    pub decimal_separator: String,
    pub group_separator: String,
    pub percent_symbol: String,
    pub minus_sign: String,
    pub plus_sign: String,
    pub exponent_marker: String,
    /// Wrap template for values carrying the plus glyph
    pub positive_template: Template,
    /// Wrap template for values carrying the minus glyph
    pub negative_template: Template,
    pub percent_template: Template,
    pub currencies: HashMap<String, CurrencyData>,
    pub compact_patterns: HashMap<CompactBracket, CompactPattern>,
}

impl Default for LocaleData {
    fn default() -> Self {
        LocaleData {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            percent_symbol: "%".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            exponent_marker: "E".to_string(),
            positive_template: Template::parse("{sign}{number}"),
            negative_template: Template::parse("{sign}{number}"),
            percent_template: Template::parse("{number}{symbol}"),
            currencies: HashMap::new(),
            compact_patterns: HashMap::new(),
        }
    }
}

/// Display data for one currency within a locale.
#[derive(Debug, Clone)]
pub struct CurrencyData {
    pub symbol: String,
    pub name: String,
    pub template: Template,
    /// Spacing hint from the reference table; carried for consumers, not
    /// interpreted by the formatter itself.
    pub spacing: String,
}

/// Compact-notation magnitude bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompactBracket {
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl CompactBracket {
    fn from_key(key: &str) -> Option<CompactBracket> {
        match key {
            "thousand" => Some(CompactBracket::Thousand),
            "million" => Some(CompactBracket::Million),
            "billion" => Some(CompactBracket::Billion),
            "trillion" => Some(CompactBracket::Trillion),
            _ => None,
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            CompactBracket::Thousand => 1e3,
            CompactBracket::Million => 1e6,
            CompactBracket::Billion => 1e9,
            CompactBracket::Trillion => 1e12,
        }
    }
}

/// Short and long templates for one compact bracket.
#[derive(Debug, Clone)]
pub struct CompactPattern {
    pub short: Template,
    pub long: Template,
}

/// Normalizes a locale identifier: the language subtag is lowercased, the
/// region subtag uppercased, any encoding suffix after `.` stripped, and
/// underscores replaced with hyphens (`EN_us.UTF-8` becomes `en-US`).
pub fn normalize_locale_id(locale_id: &str) -> String {
    let trimmed = locale_id.split('.').next().unwrap_or(locale_id);
    let hyphenated = trimmed.replace('_', "-");
    let mut normalized = String::with_capacity(hyphenated.len());
    for (i, part) in hyphenated.split('-').enumerate() {
        if i > 0 {
            normalized.push('-');
        }
        match i {
            0 => normalized.push_str(&part.to_lowercase()),
            1 => normalized.push_str(&part.to_uppercase()),
            _ => normalized.push_str(part),
        }
    }
    normalized
}

/// Resolves locale identifiers to shared locale records.
///
/// Lookups never fail: unknown identifiers fall back to the bare language
/// subtag and finally to [`DEFAULT_LOCALE`]. Resolutions are cached; the
/// cache supports unlimited concurrent readers and inserts each key at
/// most once even under racing first lookups.
pub struct LocaleCatalog {
    cache: RwLock<HashMap<String, Arc<LocaleData>>>,
}

impl LocaleCatalog {
    pub fn new() -> Self {
        LocaleCatalog {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the locale record for `locale_id`.
    pub fn lookup(&self, locale_id: &str) -> Arc<LocaleData> {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(data) = cache.get(locale_id) {
                return data.clone();
            }
        }
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Re-check: another writer may have resolved this id meanwhile.
        if let Some(data) = cache.get(locale_id) {
            return data.clone();
        }
        let data = LocaleRegistry::get().resolve(locale_id);
        cache.insert(locale_id.to_string(), data.clone());
        data
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        LocaleCatalog::new()
    }
}

static DEFAULT_CATALOG: OnceLock<LocaleCatalog> = OnceLock::new();

/// Process-wide catalog used by the convenience constructors.
pub(crate) fn default_catalog() -> &'static LocaleCatalog {
    DEFAULT_CATALOG.get_or_init(LocaleCatalog::new)
}

/// Identifiers of all embedded locales, sorted.
pub fn supported_locales() -> Vec<String> {
    let mut locales: Vec<String> = LocaleRegistry::get().locales.keys().cloned().collect();
    locales.sort();
    locales
}

/// Whether `locale_id` resolves to embedded data without hitting the
/// default-locale fallback.
pub fn is_locale_supported(locale_id: &str) -> bool {
    let registry = LocaleRegistry::get();
    let normalized = normalize_locale_id(locale_id);
    if registry.locales.contains_key(&normalized) {
        return true;
    }
    let language = normalized.split('-').next().unwrap_or("");
    registry.locales.contains_key(language)
}

/// Parsed embedded data, loaded on first use.
struct LocaleRegistry {
    locales: HashMap<String, Arc<LocaleData>>,
    default_locale: Arc<LocaleData>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(LocaleRegistry::new)
    }

    fn new() -> Self {
        let reference = match parse_currency_reference(CURRENCIES_TOML) {
            Ok(reference) => reference,
            Err(e) => {
                eprintln!("numfmt: failed to load embedded currency data: {}", e);
                HashMap::new()
            }
        };
        let locales = match parse_locales(LOCALES_TOML, &reference) {
            Ok(locales) => locales,
            Err(e) => {
                eprintln!("numfmt: failed to load embedded locale data: {}", e);
                HashMap::new()
            }
        };
        let default_locale = locales
            .get(DEFAULT_LOCALE)
            .cloned()
            .unwrap_or_else(|| Arc::new(LocaleData::default()));
        LocaleRegistry {
            locales,
            default_locale,
        }
    }

    fn resolve(&self, locale_id: &str) -> Arc<LocaleData> {
        let normalized = normalize_locale_id(locale_id);
        if let Some(data) = self.locales.get(&normalized) {
            return data.clone();
        }
        let language = normalized.split('-').next().unwrap_or("");
        if let Some(data) = self.locales.get(language) {
            return data.clone();
        }
        self.default_locale.clone()
    }
}

fn parse_locales(
    doc: &str,
    reference: &HashMap<String, CurrencyData>,
) -> Result<HashMap<String, Arc<LocaleData>>> {
    let parsed: toml::Value =
        toml::from_str(doc).map_err(|e| LocaleError::Parse(e.to_string()))?;
    let table = parsed
        .as_table()
        .ok_or_else(|| LocaleError::Data("root is not a table".to_string()))?;

    let mut base = LocaleData::default();
    if let Some(base_value) = table.get("base") {
        apply_settings(&mut base, base_value)?;
    }

    let mut locales = HashMap::new();
    for (locale_id, value) in table {
        if locale_id == "base" {
            continue;
        }
        let mut data = base.clone();
        apply_settings(&mut data, value)?;
        apply_currencies(&mut data, value, reference)?;
        apply_compact_patterns(&mut data, value)?;
        locales.insert(locale_id.to_string(), Arc::new(data));
    }
    Ok(locales)
}

fn apply_settings(data: &mut LocaleData, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::Data("locale entry is not a table".to_string()))?;

    if let Some(s) = table.get("decimal").and_then(|v| v.as_str()) {
        data.decimal_separator = s.to_string();
    }
    if let Some(s) = table.get("group").and_then(|v| v.as_str()) {
        data.group_separator = s.to_string();
    }
    if let Some(s) = table.get("percent").and_then(|v| v.as_str()) {
        data.percent_symbol = s.to_string();
    }
    if let Some(s) = table.get("minus").and_then(|v| v.as_str()) {
        data.minus_sign = s.to_string();
    }
    if let Some(s) = table.get("plus").and_then(|v| v.as_str()) {
        data.plus_sign = s.to_string();
    }
    if let Some(s) = table.get("exponent").and_then(|v| v.as_str()) {
        data.exponent_marker = s.to_string();
    }
    if let Some(s) = table.get("positive_pattern").and_then(|v| v.as_str()) {
        data.positive_template = Template::parse(s);
    }
    if let Some(s) = table.get("negative_pattern").and_then(|v| v.as_str()) {
        data.negative_template = Template::parse(s);
    }
    if let Some(s) = table.get("percent_pattern").and_then(|v| v.as_str()) {
        data.percent_template = Template::parse(s);
    }
    Ok(())
}

fn apply_currencies(
    data: &mut LocaleData,
    value: &toml::Value,
    reference: &HashMap<String, CurrencyData>,
) -> Result<()> {
    let Some(currencies) = value.get("currencies") else {
        return Ok(());
    };
    let currencies = currencies
        .as_table()
        .ok_or_else(|| LocaleError::Data("currencies is not a table".to_string()))?;

    for (code, entry) in currencies {
        let entry = entry
            .as_table()
            .ok_or_else(|| LocaleError::Data(format!("currency {} is not a table", code)))?;

        let mut symbol = entry
            .get("symbol")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let mut name = entry
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let pattern = entry
            .get("pattern")
            .and_then(|v| v.as_str())
            .unwrap_or("{symbol}{number}");

        // The reference table backfills display fields a locale leaves
        // empty and supplies the spacing hint; a locale's own template is
        // never overridden.
        let mut spacing = String::new();
        if let Some(extended) = reference.get(code) {
            if symbol.is_empty() {
                symbol = extended.symbol.clone();
            }
            if name.is_empty() {
                name = extended.name.clone();
            }
            spacing = extended.spacing.clone();
        }

        data.currencies.insert(
            code.to_string(),
            CurrencyData {
                symbol,
                name,
                template: Template::parse(pattern),
                spacing,
            },
        );
    }
    Ok(())
}

fn apply_compact_patterns(data: &mut LocaleData, value: &toml::Value) -> Result<()> {
    let Some(compact) = value.get("compact") else {
        return Ok(());
    };
    let compact = compact
        .as_table()
        .ok_or_else(|| LocaleError::Data("compact is not a table".to_string()))?;

    for (key, entry) in compact {
        let Some(bracket) = CompactBracket::from_key(key) else {
            continue;
        };
        let entry = entry
            .as_table()
            .ok_or_else(|| LocaleError::Data(format!("compact {} is not a table", key)))?;
        let short = entry.get("short").and_then(|v| v.as_str()).unwrap_or("");
        let long = entry.get("long").and_then(|v| v.as_str()).unwrap_or("");
        data.compact_patterns.insert(
            bracket,
            CompactPattern {
                short: Template::parse_compact(short),
                long: Template::parse_compact(long),
            },
        );
    }
    Ok(())
}

fn parse_currency_reference(doc: &str) -> Result<HashMap<String, CurrencyData>> {
    let parsed: toml::Value =
        toml::from_str(doc).map_err(|e| LocaleError::Parse(e.to_string()))?;
    let table = parsed
        .as_table()
        .ok_or_else(|| LocaleError::Data("root is not a table".to_string()))?;

    let mut reference = HashMap::new();
    for (code, entry) in table {
        let entry = entry
            .as_table()
            .ok_or_else(|| LocaleError::Data(format!("currency {} is not a table", code)))?;
        let symbol = entry
            .get("symbol")
            .and_then(|v| v.as_str())
            .unwrap_or(code)
            .to_string();
        let name = entry
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(code)
            .to_string();
        let pattern = entry
            .get("pattern")
            .and_then(|v| v.as_str())
            .unwrap_or("{number} {symbol}");
        let spacing = entry
            .get("spacing")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        reference.insert(
            code.to_string(),
            CurrencyData {
                symbol,
                name,
                template: Template::parse(pattern),
                spacing,
            },
        );
    }
    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_locales_load() {
        let locales = supported_locales();
        assert!(locales.contains(&"en".to_string()));
        assert!(locales.contains(&"ru".to_string()));

        let catalog = LocaleCatalog::new();
        let en = catalog.lookup("en");
        assert_eq!(en.decimal_separator, ".");
        assert_eq!(en.group_separator, ",");

        let ru = catalog.lookup("ru");
        assert_eq!(ru.decimal_separator, ",");
        assert_eq!(ru.group_separator, " ");
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_locale_id("EN_us.UTF-8"), "en-US");
        assert_eq!(normalize_locale_id("ru_RU"), "ru-RU");
        assert_eq!(normalize_locale_id("de"), "de");
        assert_eq!(normalize_locale_id("zh-cn"), "zh-CN");
    }

    #[test]
    fn fallback_chain() {
        let catalog = LocaleCatalog::new();
        // Region falls back to the language subtag.
        let en_us = catalog.lookup("en-US");
        assert_eq!(en_us.group_separator, ",");
        let ru_ru = catalog.lookup("ru_RU.UTF-8");
        assert_eq!(ru_ru.decimal_separator, ",");
        // Unknown locales end at the default.
        let unknown = catalog.lookup("tlh");
        assert_eq!(unknown.decimal_separator, ".");
    }

    #[test]
    fn lookup_is_cached() {
        let catalog = LocaleCatalog::new();
        let first = catalog.lookup("fr");
        let second = catalog.lookup("fr");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn supported_check() {
        assert!(is_locale_supported("en"));
        assert!(is_locale_supported("en-GB"));
        assert!(is_locale_supported("ja_JP.UTF-8"));
        assert!(!is_locale_supported("tlh"));
    }

    #[test]
    fn currency_enrichment_sets_spacing() {
        let catalog = LocaleCatalog::new();
        let en = catalog.lookup("en");
        let eur = en.currencies.get("EUR").expect("EUR entry");
        assert_eq!(eur.symbol, "€");
        assert_eq!(eur.spacing, " ");
    }
}
