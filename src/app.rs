//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::config::AppConfig;
use crate::net::api::MockApi;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, posts::PostsPage, settings::SettingsPage,
    users::UsersPage,
};
use crate::routes::AppRoute;
use crate::state::chrome::ChromeState;
use crate::state::session::{SessionContext, SessionStore};

/// Root application component.
///
/// Provides shared state through context and sets up client-side routing.
/// Every route view goes through `RequireAuth`, which lets `/login` through
/// unconditionally.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let brand = config.brand.clone();
    provide_context(MockApi::new(config.latency));
    provide_context(config);
    provide_context(SessionContext::new(SessionStore::default()));
    provide_context(RwSignal::new(ChromeState::default()));

    view! {
        <Title formatter=move |page: String| format!("{page} | {brand}")/>

        <Router>
            <div class="app">
                <NavBar/>
                <main class="app__main">
                    <Routes fallback=NotFoundPage>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <RequireAuth route=AppRoute::Dashboard><DashboardPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("users")
                            view=|| view! { <RequireAuth route=AppRoute::Users><UsersPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("posts")
                            view=|| view! { <RequireAuth route=AppRoute::Posts><PostsPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("settings")
                            view=|| view! { <RequireAuth route=AppRoute::Settings><SettingsPage/></RequireAuth> }
                        />
                        <Route
                            path=StaticSegment("login")
                            view=|| view! { <RequireAuth route=AppRoute::Login><LoginPage/></RequireAuth> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
