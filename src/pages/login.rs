//! Login page with a local, backend-free sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards send unauthenticated visitors here with `?redirect=<path>`. A
//! successful sign-in returns them to that page, or to the dashboard when
//! the target is missing or not an in-app protected route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::routes::AppRoute;
use crate::state::session::{Credentials, LoginError, SessionAccess, SessionContext};
use crate::util::guard::{REDIRECT_PARAM, login_redirect_target};

/// Sign in and pick the page to land on.
///
/// # Errors
///
/// Propagates the session's `LoginError`; the redirect is not consulted.
pub fn submit<S>(session: &mut S, credentials: &Credentials, redirect: Option<&str>) -> Result<AppRoute, LoginError>
where
    S: SessionAccess + ?Sized,
{
    session.login(credentials)?;
    Ok(login_redirect_target(redirect))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let query = use_query_map();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let redirect = query.with_untracked(|q| q.get(REDIRECT_PARAM));
        let credentials = Credentials::new(name.get_untracked(), email.get_untracked(), password.get_untracked());
        let mut session = session;
        match submit(&mut session, &credentials, redirect.as_deref()) {
            Ok(target) => {
                password.set(String::new());
                error.set(None);
                navigate(target.path(), NavigateOptions::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Use any name, email, and password."</p>
                <Show when=move || session.is_authenticated()>
                    <p class="login-message">
                        {move || {
                            let name = session.current_user().map(|u| u.name).unwrap_or_default();
                            format!("Signed in as {name}. Signing in again replaces this session.")
                        }}
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="field__label" for="login-name">"Name"</label>
                    <input
                        id="login-name"
                        class="login-input"
                        type="text"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="field__label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="field__label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button login-button" type="submit">"Sign in"</button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-message login-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
