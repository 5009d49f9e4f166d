#![forbid(unsafe_code)]

//! String catalog: per-locale key/value tables with fallback lookup.
//!
//! Tables are flat. Nested JSON documents are flattened on load, so
//! `{"profile": {"switch": "Switch"}}` becomes the key `profile.switch`.
//!
//! # Invariants
//!
//! 1. [`StringCatalog::get`] tries the requested locale, its base language,
//!    then each fallback locale in order, and never consults a locale twice.
//! 2. Adding a locale that already exists merges keys; later values win.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::locale::{Locale, normalize_locale};

/// Error loading a translation table.
#[derive(Debug)]
pub enum CatalogError {
    /// The document is not valid JSON.
    Json(serde_json::Error),
    /// The document root is not an object.
    NotAnObject,
    /// A leaf is neither a string, number nor boolean.
    UnsupportedValue {
        /// Dotted key of the offending leaf.
        key: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid translation JSON: {err}"),
            Self::NotAnObject => write!(f, "translation document must be a JSON object"),
            Self::UnsupportedValue { key } => {
                write!(f, "unsupported translation value at {key:?}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

// ---------------------------------------------------------------------------
// LocaleStrings
// ---------------------------------------------------------------------------

/// Flat key → string table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    /// Parse a (possibly nested) JSON object into a flat table.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(map) = root else {
            return Err(CatalogError::NotAnObject);
        };
        let mut table = Self::new();
        for (key, value) in map {
            table.flatten(key, value)?;
        }
        Ok(table)
    }

    fn flatten(&mut self, key: String, value: Value) -> Result<(), CatalogError> {
        match value {
            Value::String(s) => self.insert(key, s),
            Value::Number(n) => self.insert(key, n.to_string()),
            Value::Bool(b) => self.insert(key, b.to_string()),
            Value::Object(map) => {
                for (child, value) in map {
                    self.flatten(format!("{key}.{child}"), value)?;
                }
            }
            Value::Null | Value::Array(_) => return Err(CatalogError::UnsupportedValue { key }),
        }
        Ok(())
    }

    fn merge(&mut self, other: Self) {
        self.strings.extend(other.strings);
    }
}

// ---------------------------------------------------------------------------
// StringCatalog
// ---------------------------------------------------------------------------

/// Multi-locale string catalog.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
    order: Vec<Locale>,
    fallback_chain: Vec<Locale>,
}

impl StringCatalog {
    /// Create an empty catalog with no fallbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or merge into) a locale's table.
    pub fn add_locale(&mut self, locale: impl Into<Locale>, strings: LocaleStrings) {
        let locale = normalize_locale(locale.into());
        match self.locales.get_mut(&locale) {
            Some(existing) => existing.merge(strings),
            None => {
                self.order.push(locale.clone());
                self.locales.insert(locale, strings);
            }
        }
    }

    /// Parse a JSON document and register it under `locale`.
    pub fn add_json(&mut self, locale: impl Into<Locale>, json: &str) -> Result<(), CatalogError> {
        let strings = LocaleStrings::from_json(json)?;
        self.add_locale(locale, strings);
        Ok(())
    }

    /// Locales tried, in order, after the requested one misses.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain.into_iter().map(normalize_locale).collect();
    }

    /// Current fallback chain.
    #[must_use]
    pub fn fallback_chain(&self) -> &[Locale] {
        &self.fallback_chain
    }

    /// Registered locales in registration order.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Whether `locale` has a table.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(&normalize_locale(locale.to_string()))
    }

    /// Table for one locale.
    #[must_use]
    pub fn strings(&self, locale: &str) -> Option<&LocaleStrings> {
        self.locales.get(&normalize_locale(locale.to_string()))
    }

    /// Look up `key` for `locale`, its base language (`es` for `es-ES`),
    /// then along the fallback chain.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        let requested = normalize_locale(locale.to_string());
        let base = requested.split('-').next().unwrap_or(&requested);
        let candidates = [requested.as_str(), base]
            .into_iter()
            .chain(self.fallback_chain.iter().map(String::as_str));

        let mut tried: Vec<&str> = Vec::with_capacity(2 + self.fallback_chain.len());
        for candidate in candidates {
            if tried.contains(&candidate) {
                continue;
            }
            if let Some(value) = self.locales.get(candidate).and_then(|t| t.get(key)) {
                if candidate != requested {
                    tracing::debug!(key, locale = %requested, fallback = candidate, "translation fell back");
                }
                return Some(value);
            }
            tried.push(candidate);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();
        catalog
            .add_json("en", r#"{"greeting": "Hello", "profile": {"switch": "Switch"}}"#)
            .unwrap();
        catalog.add_json("es", r#"{"greeting": "Hola"}"#).unwrap();
        catalog.set_fallback_chain(vec!["en".into()]);
        catalog
    }

    #[test]
    fn nested_keys_flatten() {
        let table = LocaleStrings::from_json(r#"{"a": {"b": {"c": "deep"}}, "n": 3, "t": true}"#)
            .unwrap();
        assert_eq!(table.get("a.b.c"), Some("deep"));
        assert_eq!(table.get("n"), Some("3"));
        assert_eq!(table.get("t"), Some("true"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(
            LocaleStrings::from_json("[1, 2]"),
            Err(CatalogError::NotAnObject)
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = LocaleStrings::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("invalid translation JSON"));
    }

    #[test]
    fn rejects_arrays_and_null() {
        let err = LocaleStrings::from_json(r#"{"menu": {"items": [1]}}"#).unwrap_err();
        assert!(
            matches!(err, CatalogError::UnsupportedValue { ref key } if key == "menu.items"),
            "got {err}"
        );
        assert!(LocaleStrings::from_json(r#"{"x": null}"#).is_err());
    }

    #[test]
    fn direct_hit() {
        assert_eq!(catalog().get("es", "greeting"), Some("Hola"));
    }

    #[test]
    fn falls_back_to_chain() {
        assert_eq!(catalog().get("es", "profile.switch"), Some("Switch"));
        assert_eq!(catalog().get("ro", "greeting"), Some("Hello"));
    }

    #[test]
    fn missing_everywhere_is_none() {
        assert_eq!(catalog().get("es", "nope"), None);
    }

    #[test]
    fn locale_tags_are_normalized() {
        let cat = catalog();
        assert_eq!(cat.get("es_ES.UTF-8", "greeting"), Some("Hola"));
        assert_eq!(cat.get("es-MX", "profile.switch"), Some("Switch"));
        assert!(cat.has_locale("en"));
        assert_eq!(cat.locales(), ["en", "es"]);
    }

    #[test]
    fn add_locale_merges() {
        let mut cat = catalog();
        let mut extra = LocaleStrings::new();
        extra.insert("greeting", "Buenas");
        extra.insert("bye", "Adiós");
        cat.add_locale("es", extra);
        assert_eq!(cat.get("es", "greeting"), Some("Buenas"));
        assert_eq!(cat.get("es", "bye"), Some("Adiós"));
        assert_eq!(cat.locales(), ["en", "es"]);
    }
}
