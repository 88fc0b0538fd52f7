//! Post summary card on the posts page.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::format::short_date;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let published = short_date(post.publish_date);
    view! {
        <article class="card post-card">
            <div class="post-card__header">
                <span class=post.category.badge_class()>{post.category.label()}</span>
            </div>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__excerpt">{post.excerpt}</p>
            <div class="post-card__footer">
                <div class="post-card__byline">
                    <span class="post-card__meta">
                        <span class="icon icon--user" aria-hidden="true"></span>
                        {post.author}
                    </span>
                    <span class="post-card__meta">
                        <span class="icon icon--calendar" aria-hidden="true"></span>
                        {published}
                    </span>
                </div>
                <span class="post-card__meta">
                    <span class="icon icon--message" aria-hidden="true"></span>
                    {post.comments}
                </span>
            </div>
        </article>
    }
}
