use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = AppConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.brand, "Rust Dashboard");
    assert_eq!(cfg.log_level, Level::Info);
    assert_eq!(cfg.latency, MockLatency::default());
}

#[test]
fn overrides_are_applied() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        (BRAND_KEY, "  Acme Console "),
        (LOG_LEVEL_KEY, "debug"),
        (MOCK_LATENCY_KEY, "0"),
    ]))
    .unwrap();
    assert_eq!(cfg.brand, "Acme Console");
    assert_eq!(cfg.log_level, Level::Debug);
    assert_eq!(cfg.latency, MockLatency::uniform(Duration::ZERO));
}

#[test]
fn blank_brand_falls_back_to_default() {
    let cfg = AppConfig::from_lookup(lookup_from(&[(BRAND_KEY, "   ")])).unwrap();
    assert_eq!(cfg.brand, DEFAULT_BRAND);
}

#[test]
fn bad_log_level_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(LOG_LEVEL_KEY, "loud")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: LOG_LEVEL_KEY, value: "loud".to_owned() });
}

#[test]
fn bad_latency_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[(MOCK_LATENCY_KEY, "-5")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value '-5' for DASHBOARD_MOCK_LATENCY_MS");
}

#[test]
fn logo_mark_is_first_alphanumeric_uppercased() {
    assert_eq!(AppConfig::default().logo_mark(), "R");
    let cfg = AppConfig { brand: "  *acme".to_owned(), ..AppConfig::default() };
    assert_eq!(cfg.logo_mark(), "A");
}
