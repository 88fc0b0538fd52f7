//! Route protection decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireAuth` calls `evaluate` on every session change and the login page
//! calls `login_redirect_target` after signing in, so both sides of the
//! redirect round-trip agree on where the user ends up.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::AppRoute;
use crate::state::session::SessionAccess;

/// Query parameter carrying the page to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

/// What the shell should do with a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect { to: String },
}

/// Decide whether `route` may render for the current session.
pub fn evaluate<S>(session: &S, route: AppRoute) -> GuardOutcome
where
    S: SessionAccess + ?Sized,
{
    if !route.requires_session() || session.is_authenticated() {
        return GuardOutcome::Render;
    }
    GuardOutcome::Redirect { to: login_href(route) }
}

/// Login URL that returns to `from` once signed in.
pub fn login_href(from: AppRoute) -> String {
    if from == AppRoute::Dashboard || !from.requires_session() {
        return AppRoute::Login.path().to_owned();
    }
    format!("{}?{REDIRECT_PARAM}={}", AppRoute::Login.path(), from.path())
}

/// Where to go after a successful login.
///
/// Only protected in-app pages are honored; anything else, including
/// absolute URLs, lands on the dashboard.
pub fn login_redirect_target(raw: Option<&str>) -> AppRoute {
    raw.and_then(|value| value.parse::<AppRoute>().ok())
        .filter(|route| route.requires_session())
        .unwrap_or(AppRoute::Dashboard)
}
