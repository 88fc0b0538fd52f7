#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn explicit_themes_ignore_system_preference() {
    assert!(!resolves_dark(Theme::Light, true));
    assert!(resolves_dark(Theme::Dark, false));
}

#[test]
fn system_theme_follows_preference() {
    assert!(resolves_dark(Theme::System, true));
    assert!(!resolves_dark(Theme::System, false));
}

#[test]
fn native_build_has_no_system_preference() {
    assert!(!system_prefers_dark());
    assert!(!apply(Theme::System));
    assert!(apply(Theme::Dark));
}
