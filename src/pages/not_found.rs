//! Fallback for paths that match no route.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found"/>
        <div class="page page--centered">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__subtitle">"The page you are looking for does not exist."</p>
            <a class="button" href=AppRoute::Dashboard.path()>"Back to dashboard"</a>
        </div>
    }
}
