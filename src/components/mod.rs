//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome, the route guard, and the cards
//! and panels pages are built from. Shared state arrives through Leptos
//! context; page data arrives as props.

pub mod feature_card;
pub mod nav_bar;
pub mod post_card;
pub mod require_auth;
pub mod settings_panels;
pub mod stat_card;
pub mod status;
pub mod user_card;
