//! Route identities and the static navigation table.
//!
//! DESIGN
//! ======
//! Pages never inspect the browser location themselves. The router hands the
//! shell an explicit `AppRoute`, and the nav bar derives link highlighting
//! from the router's current path via `NavItem::is_active`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;
use std::str::FromStr;

/// Every addressable page in the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Users,
    Posts,
    Settings,
    Login,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Dashboard,
        AppRoute::Users,
        AppRoute::Posts,
        AppRoute::Settings,
        AppRoute::Login,
    ];

    /// Absolute path the router mounts this page at.
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/",
            AppRoute::Users => "/users",
            AppRoute::Posts => "/posts",
            AppRoute::Settings => "/settings",
            AppRoute::Login => "/login",
        }
    }

    /// Whether rendering this page requires an authenticated session.
    pub fn requires_session(self) -> bool {
        !matches!(self, AppRoute::Login)
    }

    /// Document title shown while the page is active.
    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Users => "Users",
            AppRoute::Posts => "Posts",
            AppRoute::Settings => "Settings",
            AppRoute::Login => "Sign in",
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A path that does not belong to any page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no route for path '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for AppRoute {
    type Err = UnknownRoute;

    /// Parses a router path. Query strings, fragments, and a single trailing
    /// slash are ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        AppRoute::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| UnknownRoute(raw.to_owned()))
    }
}

/// Icon shown next to a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Users,
    FileText,
    Settings,
}

impl NavIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            NavIcon::Home => "icon icon--home",
            NavIcon::Users => "icon icon--users",
            NavIcon::FileText => "icon icon--file-text",
            NavIcon::Settings => "icon icon--settings",
        }
    }
}

/// One entry in the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    /// `/` is only active on an exact match; other items also match their
    /// nested paths.
    pub fn is_active(&self, current_path: &str) -> bool {
        let own = self.path();
        if own == "/" {
            return current_path == "/" || current_path.is_empty();
        }
        current_path == own
            || current_path
                .strip_prefix(own)
                .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { route: AppRoute::Dashboard, label: "Home", icon: NavIcon::Home },
    NavItem { route: AppRoute::Users, label: "Users", icon: NavIcon::Users },
    NavItem { route: AppRoute::Posts, label: "Posts", icon: NavIcon::FileText },
    NavItem { route: AppRoute::Settings, label: "Settings", icon: NavIcon::Settings },
];

/// CSS class for a nav link in the desktop bar or the mobile drawer.
pub fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link nav-link--active" } else { "nav-link" }
}
