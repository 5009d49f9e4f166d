//! Bundled tables stay in sync with the default locale.

use folio_i18n::{StringCatalog, Translator};
use proptest::prelude::*;

#[test]
fn every_locale_key_exists_in_default_locale() {
    let tr = Translator::bundled().unwrap();
    let catalog = tr.catalog();
    let en = catalog.strings("en").unwrap();
    for locale in catalog.locales() {
        let table = catalog.strings(locale).unwrap();
        for key in table.keys() {
            assert!(en.get(key).is_some(), "{locale} has key {key} missing from en");
        }
    }
}

#[test]
fn every_default_key_resolves_in_every_locale() {
    let mut tr = Translator::bundled().unwrap();
    let keys: Vec<String> = tr
        .catalog()
        .strings("en")
        .unwrap()
        .keys()
        .map(str::to_string)
        .collect();
    for locale in ["en", "ro", "es", "de"] {
        tr.set_locale(locale);
        for key in &keys {
            assert_ne!(tr.t(key), key.as_str(), "{locale}:{key} unresolved");
        }
    }
}

proptest! {
    #[test]
    fn fallback_chain_resolves_nested_keys(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}", value in "[ -~]{0,20}") {
        prop_assume!(key != "wrapped.leaf");
        let mut catalog = StringCatalog::new();
        let json = serde_json::json!({ "wrapped": { "leaf": value.clone() } }).to_string();
        catalog.add_json("en", &json).unwrap();
        catalog.set_fallback_chain(vec!["en".into(), "en".into()]);
        prop_assert_eq!(catalog.get("xx", "wrapped.leaf"), Some(value.as_str()));
        prop_assert_eq!(catalog.get("xx", &key), None);
    }
}
