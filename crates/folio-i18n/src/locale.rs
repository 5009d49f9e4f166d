#![forbid(unsafe_code)]

//! Locale tags.

/// A BCP-47-ish locale tag such as `"en"` or `"es-ES"`.
pub type Locale = String;

/// Locale used when a tag is empty or unusable.
pub const DEFAULT_LOCALE: &str = "en";

/// Normalize a tag: drop codeset/modifier suffixes, `_` → `-`, lower-case
/// language, upper-case region. Unusable tags become [`DEFAULT_LOCALE`].
#[must_use]
pub fn normalize_locale(locale: Locale) -> Locale {
    normalize_locale_raw(&locale).unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Normalize a raw tag, returning `None` when nothing usable remains.
///
/// `"en_US.UTF-8@euro"` → `"en-US"`, `"C"`/`"POSIX"` → `"en"`.
#[must_use]
pub fn normalize_locale_raw(raw: &str) -> Option<Locale> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }
    let mut parts = raw.split(['_', '-']).filter(|p| !p.is_empty());
    let language = parts.next()?.to_ascii_lowercase();
    let mut normalized = language;
    for part in parts {
        normalized.push('-');
        if part.len() == 2 {
            normalized.push_str(&part.to_ascii_uppercase());
        } else {
            normalized.push_str(part);
        }
    }
    if normalized == "c" || normalized == "posix" {
        return Some(DEFAULT_LOCALE.to_string());
    }
    Some(normalized)
}
