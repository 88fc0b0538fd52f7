//! Navigation chrome state (mobile drawer and user menu).
//!
//! DESIGN
//! ======
//! Kept apart from session and page state so the nav bar can re-render its
//! menus without touching page content.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

/// Open/closed flags for the two nav bar popovers.
///
/// At most one is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeState {
    pub mobile_menu_open: bool,
    pub user_menu_open: bool,
}

impl ChromeState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        if self.mobile_menu_open {
            self.user_menu_open = false;
        }
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
        if self.user_menu_open {
            self.mobile_menu_open = false;
        }
    }

    /// Called on every navigation and on logout.
    pub fn close_menus(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(self) -> bool {
        self.mobile_menu_open || self.user_menu_open
    }
}

/// Two-letter avatar initials for the user menu button.
pub fn initials(name: &str) -> String {
    let mut letters = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase);
    let first = letters.next();
    let last = letters.last();
    first.into_iter().chain(last).collect()
}
