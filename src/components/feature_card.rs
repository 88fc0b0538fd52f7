//! Static feature tile in the dashboard features grid.

use leptos::prelude::*;

use crate::pages::dashboard::Feature;

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}
