use std::future::Future;
use std::task::Context;
use std::time::Instant;

use futures::executor::block_on;
use futures::task::noop_waker_ref;

use super::*;

fn instant_api() -> MockApi {
    MockApi::new(MockLatency::uniform(Duration::ZERO))
}

// =============================================================
// Latency defaults
// =============================================================

#[test]
fn default_latency_matches_per_page_delays() {
    let latency = MockLatency::default();
    assert_eq!(latency.dashboard, Duration::from_millis(1000));
    assert_eq!(latency.users, Duration::from_millis(800));
    assert_eq!(latency.posts, Duration::from_millis(600));
}

#[test]
fn uniform_latency_sets_every_endpoint() {
    let latency = MockLatency::uniform(Duration::ZERO);
    assert_eq!(latency, MockLatency { dashboard: Duration::ZERO, users: Duration::ZERO, posts: Duration::ZERO });
}

#[test]
fn fetch_is_pending_until_latency_elapses() {
    let latency = Duration::from_millis(50);
    let api = MockApi::new(MockLatency::uniform(latency));
    let started = Instant::now();
    let mut fetch = Box::pin(api.dashboard_stats());

    let mut cx = Context::from_waker(noop_waker_ref());
    assert!(fetch.as_mut().poll(&mut cx).is_pending());

    let stats = block_on(fetch).unwrap();
    assert!(started.elapsed() >= latency);
    assert_eq!(stats.total_users, 1250);
    assert_eq!(stats.system_health, SystemHealth::Healthy);
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn dashboard_stats_returns_literal_payload() {
    let stats = block_on(instant_api().dashboard_stats()).unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            total_users: 1250,
            total_posts: 847,
            active_users: 89,
            system_health: SystemHealth::Healthy,
        }
    );
}

#[test]
fn users_returns_six_records_in_id_order() {
    let users = block_on(instant_api().users()).unwrap();
    assert_eq!(users.len(), 6);
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(users[0].name, "John Doe");
    assert_eq!(users[0].email, "john@example.com");
    assert_eq!(users[5].join_date, NaiveDate::from_ymd_opt(2024, 4, 18).unwrap());
}

#[test]
fn user_avatars_point_at_cropped_images() {
    let users = block_on(instant_api().users()).unwrap();
    assert_eq!(
        users[0].avatar,
        "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
    );
    assert!(users.iter().all(|u| u.avatar.ends_with("&fit=crop")));
}

#[test]
fn posts_returns_six_literal_posts() {
    let posts = block_on(instant_api().posts()).unwrap();
    assert_eq!(posts.len(), 6);

    let summary: Vec<_> = posts
        .iter()
        .map(|p| (p.title.as_str(), p.author.as_str(), p.category))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Getting Started with React 19", "John Doe", PostCategory::Technology),
            ("Building Modern UIs with Tailwind CSS", "Jane Smith", PostCategory::Design),
            ("State Management with TanStack Query", "Mike Johnson", PostCategory::Development),
            ("TypeScript Best Practices", "Sarah Wilson", PostCategory::Programming),
            ("Optimizing React Performance", "Alex Brown", PostCategory::Performance),
            ("Modern JavaScript Features", "Emily Davis", PostCategory::JavaScript),
        ]
    );
}

#[test]
fn fixture_dates_are_real_calendar_dates() {
    assert!(users_fixture().is_ok());
    assert!(posts_fixture().is_ok());
    assert_eq!(
        iso_date("2024-02-31"),
        Err(FetchError::MalformedDate("2024-02-31".to_owned()))
    );
}

#[test]
fn repeated_fetches_return_fresh_equal_payloads() {
    let api = instant_api();
    let first = block_on(api.posts()).unwrap();
    let second = block_on(api.posts()).unwrap();
    assert_eq!(first, second);
}
