//! End-to-end scenarios over the public API: untrusted data arriving as
//! JSON, validated against a closed set before use.

use casewise::{ClosedVariant, UnhandledCaseError, VariantMap, VariantValue};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

impl ClosedVariant for Theme {
    fn variants() -> &'static [Self] {
        &[Theme::Light, Theme::Dark]
    }

    fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    fn value(self) -> VariantValue {
        match self {
            Theme::Light => VariantValue::from("light"),
            Theme::Dark => VariantValue::from("dark"),
        }
    }
}

#[test]
fn untrusted_payload_is_narrowed_before_use() {
    let payload: Value = serde_json::from_str(r#"{"theme": "dark", "retries": 3}"#).unwrap();

    let theme = Theme::parse(&payload["theme"]);
    assert_eq!(theme, Some(Theme::Dark));

    // A field that is missing or has the wrong shape is rejected, not coerced.
    assert_eq!(Theme::parse(&payload["missing"]), None);
    assert_eq!(Theme::parse(&payload["retries"]), None);
}

#[test]
fn stored_config_round_trips_through_the_dynamic_map() {
    let levels: VariantMap = serde_json::from_str(r#"{"LOW": 1, "MEDIUM": 2, "HIGH": 3}"#).unwrap();

    assert!(levels.is_value(&json!(2)));
    assert_eq!(levels.parse_value(&json!(3)), Some(&VariantValue::Int(3)));
    assert_eq!(levels.parse_value(&json!(4)), None);
    assert_eq!(levels.parse_value(&json!("2")), None);

    let encoded = serde_json::to_string(&levels).unwrap();
    assert_eq!(encoded, r#"{"LOW":1,"MEDIUM":2,"HIGH":3}"#);
}

#[test]
fn static_and_dynamic_layers_agree() {
    let map = Theme::as_map();
    for theme in Theme::variants() {
        let wire = Value::from(theme.value());
        assert_eq!(Theme::is_value(&wire), map.is_value(&wire));
        assert!(map.is_key(theme.name()));
    }
    assert_eq!(map.len(), Theme::variants().len());
}

#[test]
fn stale_persisted_variant_trips_the_fault() {
    // A value persisted by an older revision that knew a "sepia" theme.
    let stale: Value = json!("sepia");

    let err = match Theme::parse(&stale) {
        Some(theme) => panic!("unexpectedly parsed {theme:?}"),
        None => UnhandledCaseError::new(&stale),
    };
    assert_eq!(err.to_string(), "unhandled case: \"sepia\"");
}

#[test]
fn fault_propagates_as_a_hard_failure() {
    fn dispatch(raw: &Value) -> Result<&'static str, UnhandledCaseError> {
        match Theme::parse(raw) {
            Some(Theme::Light) => Ok("light"),
            Some(Theme::Dark) => Ok("dark"),
            None => Err(UnhandledCaseError::new(raw)),
        }
    }

    assert_eq!(dispatch(&json!("light")), Ok("light"));
    let err = dispatch(&json!({"theme": "light"})).unwrap_err();
    assert!(err.rendered().contains("theme"));
}

#[test]
fn entries_order_is_stable_for_rendering() {
    // Mixed integer-like and text keys, deliberately inserted out of order.
    let map = VariantMap::from_pairs([
        ("10", "ten"),
        ("style", "plain"),
        ("2", "two"),
        ("width", "narrow"),
    ]);

    let keys: Vec<&str> = map.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["2", "10", "style", "width"]);

    // Insertion order remains observable for declaration-order consumers.
    let declared: Vec<&str> = map.keys().collect();
    assert_eq!(declared, vec!["10", "style", "2", "width"]);
}
