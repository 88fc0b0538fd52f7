//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped data fetch or form state and delegates
//! rendering details to `components`. View-model helpers live next to the
//! page that uses them so they can be tested without a browser.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod posts;
pub mod settings;
pub mod users;
