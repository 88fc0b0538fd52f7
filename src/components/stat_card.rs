//! Headline number card on the dashboard.

use leptos::prelude::*;

use crate::pages::dashboard::StatCardModel;

#[component]
pub fn StatCard(card: StatCardModel, loading: bool) -> impl IntoView {
    let StatCardModel { title, value, icon } = card;
    view! {
        <div class="card stat-card">
            <div class="stat-card__body">
                <p class="stat-card__title">{title}</p>
                <div class="stat-card__value-row">
                    <Show
                        when=move || !loading
                        fallback=|| view! { <span class="spinner spinner--small" aria-label="Loading"></span> }
                    >
                        <p class="stat-card__value">{value.clone()}</p>
                    </Show>
                </div>
            </div>
            <span class=icon aria-hidden="true"></span>
        </div>
    }
}
