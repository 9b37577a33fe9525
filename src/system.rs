//! Host-environment locale detection.

use std::env;

use crate::locale::normalize_locale_id;

/// Environment variables consulted in priority order.
const LOCALE_ENV_VARS: [&str; 4] = ["LC_ALL", "LC_NUMERIC", "LANG", "LANGUAGE"];

/// Best-effort locale identifier from the host environment, normalized;
/// `"en"` when nothing usable is set. The result is only a hint — the
/// catalog's fallback chain absorbs identifiers with no embedded data
/// (`C`, `POSIX`, unsupported languages).
pub fn system_locale() -> String {
    for var in LOCALE_ENV_VARS {
        if let Ok(value) = env::var(var) {
            if !value.is_empty() {
                return normalize_locale_id(&value);
            }
        }
    }
    "en".to_string()
}
