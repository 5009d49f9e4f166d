#![forbid(unsafe_code)]

//! Active-locale translation front end.

use crate::catalog::{CatalogError, StringCatalog};
use crate::locale::{DEFAULT_LOCALE, Locale, normalize_locale};

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("ro", include_str!("../locales/ro.json")),
    ("es", include_str!("../locales/es.json")),
];

/// A catalog plus the active and fallback locales.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: StringCatalog,
    locale: Locale,
    fallback: Locale,
}

impl Translator {
    /// Wrap `catalog`, translating into `locale` and falling back to `fallback`.
    #[must_use]
    pub fn new(mut catalog: StringCatalog, locale: impl Into<Locale>, fallback: impl Into<Locale>) -> Self {
        let fallback = normalize_locale(fallback.into());
        catalog.set_fallback_chain(vec![fallback.clone()]);
        Self {
            catalog,
            locale: normalize_locale(locale.into()),
            fallback,
        }
    }

    /// Bundled `en`, `ro` and `es` tables, active and fallback locale `en`.
    pub fn bundled() -> Result<Self, CatalogError> {
        let mut catalog = StringCatalog::new();
        for (locale, json) in BUNDLED {
            catalog.add_json(*locale, json)?;
        }
        Ok(Self::new(catalog, DEFAULT_LOCALE, DEFAULT_LOCALE))
    }

    /// Active locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Fallback locale.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Change the active locale. Unknown locales are allowed and resolve
    /// through the fallback.
    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        self.locale = normalize_locale(locale.into());
        tracing::debug!(locale = %self.locale, "active locale changed");
    }

    /// Switch to the next registered locale (wrapping) and return it.
    pub fn cycle_locale(&mut self) -> &str {
        let locales = self.catalog.locales();
        if let Some(next) = locales
            .iter()
            .position(|l| *l == self.locale)
            .map(|i| locales[(i + 1) % locales.len()])
            .or_else(|| locales.first().copied())
        {
            let next = next.to_string();
            self.set_locale(next);
        }
        &self.locale
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &StringCatalog {
        &self.catalog
    }

    /// Translate `key`; a key missing everywhere is returned unchanged.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        match self.catalog.get(&self.locale, key) {
            Some(value) => value,
            None => {
                tracing::debug!(key, locale = %self.locale, "missing translation");
                key
            }
        }
    }

    /// Translate `key` and substitute `{name}` placeholders from `args`.
    ///
    /// Unknown placeholders are left as written.
    #[must_use]
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(key), args)
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
