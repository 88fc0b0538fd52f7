//! Dashboard landing page: headline stats and a features grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected `/` route. Stats come from `MockApi::dashboard_stats`
//! and every card shows `...` until they arrive.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::stat_card::StatCard;
use crate::components::status::ErrorBanner;
use crate::config::AppConfig;
use crate::net::api::MockApi;
use crate::net::types::DashboardStats;
use crate::state::query::QueryState;
use crate::util::format::group_thousands;

pub const PENDING_VALUE: &str = "...";

/// Display data for one stat card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardModel {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Leptos 0.8",
        description: "Fine-grained reactive UI compiled from Rust to WebAssembly",
    },
    Feature {
        title: "Leptos Router",
        description: "Client-side routing with guarded pages and login redirects",
    },
    Feature {
        title: "Local Resources",
        description: "Async data loading with loading and error states per page",
    },
    Feature {
        title: "Typed Settings",
        description: "Settings edits flow through a single typed reducer",
    },
    Feature {
        title: "Rust",
        description: "Full type safety from data fixtures to the rendered view",
    },
    Feature {
        title: "Trunk",
        description: "Fast WASM bundling with live reload during development",
    },
];

/// The four stat cards for the current fetch state, in display order.
pub fn stat_cards(state: &QueryState<DashboardStats>) -> [StatCardModel; 4] {
    let stats = state.data();
    let value = |f: fn(&DashboardStats) -> String| stats.map_or_else(|| PENDING_VALUE.to_owned(), f);
    [
        StatCardModel {
            title: "Total Users",
            value: value(|s| group_thousands(s.total_users)),
            icon: "icon icon--users stat-card__icon--blue",
        },
        StatCardModel {
            title: "Total Posts",
            value: value(|s| group_thousands(s.total_posts)),
            icon: "icon icon--file-text stat-card__icon--green",
        },
        StatCardModel {
            title: "Active Users",
            value: value(|s| group_thousands(s.active_users)),
            icon: "icon icon--activity stat-card__icon--orange",
        },
        StatCardModel {
            title: "System Health",
            value: value(|s| s.system_health.as_str().to_owned()),
            icon: "icon icon--settings stat-card__icon--purple",
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<MockApi>();
    let config = expect_context::<AppConfig>();
    let stats = LocalResource::new(move || api.dashboard_stats());
    let state = move || QueryState::from_poll(stats.get());

    move || {
        let state = state();
        if let Some(message) = state.error() {
            log::warn!("dashboard stats failed: {message}");
            return view! { <ErrorBanner message="Error loading dashboard data"/> }.into_any();
        }
        let loading = state.is_loading();
        let cards = stat_cards(&state)
            .into_iter()
            .map(|card| view! { <StatCard card loading/> })
            .collect_view();
        let features = FEATURES
            .into_iter()
            .map(|feature| view! { <FeatureCard feature/> })
            .collect_view();

        view! {
            <div class="page dashboard-page">
                <header class="dashboard-page__hero">
                    <h1 class="page__title page__title--hero">{format!("Welcome to {}", config.brand)}</h1>
                    <p class="page__subtitle">
                        "A Rust application built with Leptos, Leptos Router, and async resources"
                    </p>
                </header>

                <div class="stat-grid">{cards}</div>

                <section class="card features">
                    <h2 class="features__title">"Features"</h2>
                    <div class="features__grid">{features}</div>
                </section>
            </div>
        }
        .into_any()
    }
}
