//! Applies the appearance theme to the document root.
//!
//! A `dark-mode` class on `<html>` switches the stylesheet palette. The
//! `system` theme follows the browser's `prefers-color-scheme` media query.
//! Native builds have no document, so `apply` only reports what it would do.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::settings::{SelectOption, Theme};

pub const DARK_CLASS: &str = "dark-mode";

/// Whether `theme` renders dark, given the browser's preference.
pub fn resolves_dark(theme: Theme, system_prefers_dark: bool) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => system_prefers_dark,
    }
}

/// Read `prefers-color-scheme: dark` from the browser.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Set or clear the dark class on `<html>`. Returns the resolved mode.
pub fn apply(theme: Theme) -> bool {
    let dark = resolves_dark(theme, system_prefers_dark());
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(e) = el.class_list().toggle_with_force(DARK_CLASS, dark) {
                log::warn!("could not apply theme {}: {e:?}", theme.as_str());
            }
        }
    }
    log::debug!("theme {} resolved dark={dark}", theme.as_str());
    dark
}
