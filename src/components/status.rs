//! Loading and error placeholders shared by the data pages.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}

#[component]
pub fn ErrorBanner(message: &'static str) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <div class="error-banner__text">{message}</div>
        </div>
    }
}
