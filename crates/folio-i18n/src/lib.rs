#![forbid(unsafe_code)]

//! Localization: string catalogs, locale tags and the active-locale translator.

pub mod catalog;
pub mod locale;
pub mod translator;

pub use catalog::{CatalogError, LocaleStrings, StringCatalog};
pub use locale::{DEFAULT_LOCALE, Locale, normalize_locale};
pub use translator::Translator;
