//! Registry laws and the missing-category warning.

use std::sync::{Arc, Mutex};

use folio_icons::{IconAsset, IconRegistry, SOCIAL, TECH, normalize};
use proptest::prelude::*;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, SubscriberExt};

// ============================================================================
// Warning capture
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: Vec<(String, String)>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

fn with_capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: events.clone(),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    (result, captured)
}

#[test]
fn missing_category_warns_and_returns_none() {
    let registry = IconRegistry::with_defaults();
    let (found, events) = with_capture(|| registry.lookup_in_category("github", "games"));
    assert!(found.is_none());
    assert_eq!(events.len(), 1, "expected one warning, got {events:?}");
    assert_eq!(events[0].level, tracing::Level::WARN);
    assert!(
        events[0]
            .fields
            .iter()
            .any(|(k, v)| k == "category" && v == "games"),
        "category field missing: {:?}",
        events[0].fields
    );
}

#[test]
fn known_category_miss_is_silent() {
    let registry = IconRegistry::with_defaults();
    let (found, events) = with_capture(|| registry.lookup_in_category("cobol", TECH));
    assert!(found.is_none());
    assert!(events.is_empty());
}

#[test]
fn cross_category_fallback_finds_social() {
    let mut registry = IconRegistry::new();
    registry.insert_in(TECH, "vue", IconAsset::owned("A"));
    registry.insert_in(SOCIAL, "github", IconAsset::owned("B"));
    assert_eq!(registry.lookup("GitHub", None).map(IconAsset::path), Some("B"));
    assert_eq!(registry.lookup("GitHub", Some(TECH)).map(IconAsset::path), Some("B"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_ignores_case_and_separators(s in "[A-Za-z+#]{1,16}", sep in "[ .\\-]{0,3}") {
        let mut noisy = String::new();
        for (i, c) in s.chars().enumerate() {
            if i > 0 {
                noisy.push_str(&sep);
            }
            noisy.push(c);
        }
        prop_assert_eq!(normalize(&noisy.to_uppercase()), normalize(&s));
    }

    #[test]
    fn insert_then_lookup_in_category(name in "[A-Za-z .\\-]{0,20}", category in "[a-z]{1,8}", asset in any::<u32>()) {
        let mut registry = IconRegistry::new();
        registry.insert_in(&category, &name, asset);
        prop_assert_eq!(registry.lookup_in_category(&name, &category), Some(&asset));
        prop_assert!(registry.contains(&name, Some(&category)));
    }

    #[test]
    fn second_insert_wins(name in "[a-z]{1,10}", first in any::<u32>(), second in any::<u32>()) {
        let mut registry = IconRegistry::new();
        registry.insert_in(TECH, &name, first);
        registry.insert_in(TECH, &name.to_uppercase(), second);
        prop_assert_eq!(registry.lookup_in_category(&name, TECH), Some(&second));
        prop_assert_eq!(registry.names(Some(TECH)).len(), 1);
    }

    #[test]
    fn contains_agrees_with_lookup(name in "[a-z]{0,6}", probe in "[a-z]{0,6}") {
        let mut registry = IconRegistry::new();
        registry.insert(&name, ());
        prop_assert_eq!(registry.contains(&probe, None), registry.lookup(&probe, None).is_some());
    }
}
