//! Posts page: article cards from `MockApi::posts`.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::status::{ErrorBanner, LoadingSpinner};
use crate::net::api::MockApi;
use crate::state::query::QueryState;
use crate::util::format::count_label;

#[component]
pub fn PostsPage() -> impl IntoView {
    let api = expect_context::<MockApi>();
    let posts = LocalResource::new(move || api.posts());

    move || {
        let state = QueryState::from_poll(posts.get());
        if let Some(message) = state.error() {
            log::warn!("posts fetch failed: {message}");
            return view! { <ErrorBanner message="Error loading posts"/> }.into_any();
        }
        let count = count_label(state.data().map(Vec::len), "posts");
        let body = match state {
            QueryState::Ready(list) => view! {
                <div class="card-grid card-grid--two">
                    {list.into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
                </div>
            }
            .into_any(),
            _ => view! { <LoadingSpinner label="Loading posts..."/> }.into_any(),
        };

        view! {
            <div class="page">
                <div class="page__header">
                    <h1 class="page__title">"Posts"</h1>
                    <div class="page__count">{count}</div>
                </div>
                {body}
            </div>
        }
        .into_any()
    }
}
