//! Client-side state shared through Leptos context or owned by a page.

pub mod chrome;
pub mod query;
pub mod session;
pub mod settings;
