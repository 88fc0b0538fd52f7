//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only concerns (timers, the document root) sit behind `csr`
//! feature gates here so page logic stays testable natively.

pub mod delay;
pub mod format;
pub mod guard;
pub mod theme;
