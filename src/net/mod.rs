//! Data access for the dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend yet. `api` serves fixed payloads after an artificial
//! delay, and `types` holds the shapes a real transport would deserialize.

pub mod api;
pub mod types;
