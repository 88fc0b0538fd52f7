//! Route guard wrapper for page views.
//!
//! DESIGN
//! ======
//! Each route view wraps its page in `RequireAuth` and names the route it
//! serves. The guard re-evaluates whenever the session changes, so logging
//! out on a protected page redirects immediately. Children are only built
//! on `GuardOutcome::Render`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Redirect;

use crate::routes::AppRoute;
use crate::state::session::SessionContext;
use crate::util::guard::{self, GuardOutcome};

/// Render `children` for `route` if the session allows it, else redirect to
/// the login page.
#[component]
pub fn RequireAuth(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let body = move || match guard::evaluate(&session, route) {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect { to } => {
            log::debug!("guard redirecting {} to {to}", route.path());
            view! { <Redirect path=to/> }.into_any()
        }
    };

    view! {
        <Title text=route.title()/>
        {body}
    }
}
