use super::*;
use crate::state::session::{Credentials, SessionStore};

fn signed_in() -> SessionStore {
    let mut store = SessionStore::default();
    store
        .login(&Credentials::new("Jane Smith", "jane@example.com", "secret"))
        .unwrap();
    store
}

fn protected_routes() -> impl Iterator<Item = AppRoute> {
    AppRoute::ALL.into_iter().filter(|r| r.requires_session())
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn unauthenticated_protected_routes_redirect_to_login() {
    let store = SessionStore::default();
    for route in protected_routes() {
        match evaluate(&store, route) {
            GuardOutcome::Redirect { to } => assert!(to.starts_with("/login"), "{route}: {to}"),
            GuardOutcome::Render => panic!("{route} rendered without a session"),
        }
    }
}

#[test]
fn login_page_renders_without_a_session() {
    assert_eq!(evaluate(&SessionStore::default(), AppRoute::Login), GuardOutcome::Render);
}

#[test]
fn authenticated_session_renders_every_route() {
    let store = signed_in();
    for route in AppRoute::ALL {
        assert_eq!(evaluate(&store, route), GuardOutcome::Render, "{route}");
    }
}

#[test]
fn logout_restores_redirects() {
    let mut store = signed_in();
    assert_eq!(evaluate(&store, AppRoute::Posts), GuardOutcome::Render);

    store.logout();
    assert_eq!(
        evaluate(&store, AppRoute::Posts),
        GuardOutcome::Redirect { to: "/login?redirect=/posts".to_owned() }
    );
}

#[test]
fn evaluate_accepts_trait_objects() {
    let store = signed_in();
    let dyn_session: &dyn SessionAccess = &store;
    assert_eq!(evaluate(dyn_session, AppRoute::Settings), GuardOutcome::Render);
}

// =============================================================
// login_href / login_redirect_target
// =============================================================

#[test]
fn login_href_carries_return_path() {
    assert_eq!(login_href(AppRoute::Users), "/login?redirect=/users");
    assert_eq!(login_href(AppRoute::Settings), "/login?redirect=/settings");
}

#[test]
fn login_href_omits_redundant_targets() {
    assert_eq!(login_href(AppRoute::Dashboard), "/login");
    assert_eq!(login_href(AppRoute::Login), "/login");
}

#[test]
fn redirect_target_round_trips_login_href() {
    for route in protected_routes() {
        let href = login_href(route);
        let raw = href.split_once("redirect=").map(|(_, v)| v);
        assert_eq!(login_redirect_target(raw), route);
    }
}

#[test]
fn redirect_target_falls_back_to_dashboard() {
    assert_eq!(login_redirect_target(None), AppRoute::Dashboard);
    assert_eq!(login_redirect_target(Some("")), AppRoute::Dashboard);
    assert_eq!(login_redirect_target(Some("/login")), AppRoute::Dashboard);
    assert_eq!(login_redirect_target(Some("/nope")), AppRoute::Dashboard);
    assert_eq!(login_redirect_target(Some("https://evil.example/users")), AppRoute::Dashboard);
}
