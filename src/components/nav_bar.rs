//! Top navigation bar: brand, route links, user menu, and mobile drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed page. Active link styling comes
//! from the router's current path, and both popovers close on every
//! navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::AppConfig;
use crate::routes::{AppRoute, NAV_ITEMS, nav_link_class};
use crate::state::chrome::{ChromeState, initials};
use crate::state::session::{SessionAccess, SessionContext};

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<SessionContext>();
    let chrome = expect_context::<RwSignal<ChromeState>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        pathname.track();
        chrome.update(ChromeState::close_menus);
    });

    let user_name = move || session.current_user().map(|u| u.name).unwrap_or_default();
    let user_email = move || session.current_user().map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        let mut session = session;
        session.logout();
        chrome.update(ChromeState::close_menus);
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href=AppRoute::Dashboard.path() class="nav-bar__brand">
                    <span class="nav-bar__logo">{config.logo_mark()}</span>
                    <span class="nav-bar__brand-name">{config.brand.clone()}</span>
                </a>

                <div class="nav-bar__links">
                    <NavLinks pathname/>
                </div>

                <div class="nav-bar__actions">
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| {
                            view! {
                                <a href=AppRoute::Login.path() class="nav-link">
                                    "Sign in"
                                </a>
                            }
                        }
                    >
                        <div class="user-menu">
                            <button
                                class="user-menu__button"
                                aria-haspopup="true"
                                aria-expanded=move || chrome.with(|c| c.user_menu_open).to_string()
                                on:click=move |_| chrome.update(ChromeState::toggle_user_menu)
                            >
                                {move || initials(&user_name())}
                            </button>
                            <Show when=move || chrome.with(|c| c.user_menu_open)>
                                <div class="user-menu__panel">
                                    <p class="user-menu__name">{user_name}</p>
                                    <p class="user-menu__email">{user_email}</p>
                                    <button class="user-menu__logout" on:click=on_logout>
                                        "Log out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                    <button
                        class="nav-bar__menu-toggle"
                        aria-label="Toggle navigation"
                        on:click=move |_| chrome.update(ChromeState::toggle_mobile_menu)
                    >
                        <span class="icon icon--menu" aria-hidden="true"></span>
                    </button>
                </div>
            </div>

            <Show when=move || chrome.with(|c| c.any_open())>
                <div class="nav-bar__backdrop" on:click=move |_| chrome.update(ChromeState::close_menus)></div>
            </Show>
            <Show when=move || chrome.with(|c| c.mobile_menu_open)>
                <div class="nav-bar__mobile">
                    <NavLinks pathname/>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks(pathname: Memo<String>) -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let item = *item;
            view! {
                <a
                    href=item.path()
                    class=move || nav_link_class(pathname.with(|p| item.is_active(p)))
                >
                    <span class=item.icon.css_class() aria-hidden="true"></span>
                    {item.label}
                </a>
            }
        })
        .collect_view()
}
