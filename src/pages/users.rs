//! Users page: member cards from `MockApi::users`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::status::{ErrorBanner, LoadingSpinner};
use crate::components::user_card::UserCard;
use crate::net::api::MockApi;
use crate::state::query::QueryState;
use crate::util::format::{count_label, short_date};

/// "Joined M/D/YYYY" line under a member's email.
pub fn joined_label(join_date: NaiveDate) -> String {
    format!("Joined {}", short_date(join_date))
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<MockApi>();
    let users = LocalResource::new(move || api.users());

    move || {
        let state = QueryState::from_poll(users.get());
        if let Some(message) = state.error() {
            log::warn!("users fetch failed: {message}");
            return view! { <ErrorBanner message="Error loading users"/> }.into_any();
        }
        let count = count_label(state.data().map(Vec::len), "users");
        let body = match state {
            QueryState::Ready(list) => view! {
                <div class="card-grid card-grid--three">
                    {list.into_iter().map(|user| view! { <UserCard user/> }).collect_view()}
                </div>
            }
            .into_any(),
            _ => view! { <LoadingSpinner label="Loading users..."/> }.into_any(),
        };

        view! {
            <div class="page">
                <div class="page__header">
                    <h1 class="page__title">"Users"</h1>
                    <div class="page__count">{count}</div>
                </div>
                {body}
            </div>
        }
        .into_any()
    }
}
