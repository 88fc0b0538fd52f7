//! Member card on the users page.

use leptos::prelude::*;

use crate::net::types::UserRecord;
use crate::pages::users::joined_label;

#[component]
pub fn UserCard(user: UserRecord) -> impl IntoView {
    let joined = joined_label(user.join_date);
    view! {
        <div class="card user-card">
            <img class="user-card__avatar" src=user.avatar alt=user.name.clone()/>
            <div class="user-card__details">
                <h3 class="user-card__name">{user.name}</h3>
                <div class="user-card__meta">
                    <span class="icon icon--mail" aria-hidden="true"></span>
                    {user.email}
                </div>
                <div class="user-card__meta">
                    <span class="icon icon--calendar" aria-hidden="true"></span>
                    {joined}
                </div>
            </div>
        </div>
    }
}
