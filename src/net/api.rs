//! Mock data functions standing in for a future HTTP backend.
//!
//! Each call waits a fixed delay and returns a literal payload. The only
//! failure is a fixture date that is not a real calendar date.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use chrono::NaiveDate;

use super::types::{DashboardStats, Post, PostCategory, SystemHealth, UserRecord};
use crate::util::delay;

pub const DASHBOARD_LATENCY_MS: u64 = 1000;
pub const USERS_LATENCY_MS: u64 = 800;
pub const POSTS_LATENCY_MS: u64 = 600;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed date '{0}'")]
    MalformedDate(String),
}

/// Per-endpoint artificial delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockLatency {
    pub dashboard: Duration,
    pub users: Duration,
    pub posts: Duration,
}

impl MockLatency {
    /// Same delay for every endpoint.
    pub fn uniform(delay: Duration) -> Self {
        Self { dashboard: delay, users: delay, posts: delay }
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            dashboard: Duration::from_millis(DASHBOARD_LATENCY_MS),
            users: Duration::from_millis(USERS_LATENCY_MS),
            posts: Duration::from_millis(POSTS_LATENCY_MS),
        }
    }
}

/// Handle to the mock data functions, provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MockApi {
    pub latency: MockLatency,
}

impl MockApi {
    pub fn new(latency: MockLatency) -> Self {
        Self { latency }
    }

    /// # Errors
    ///
    /// Never fails today.
    pub async fn dashboard_stats(self) -> Result<DashboardStats, FetchError> {
        delay::sleep(self.latency.dashboard).await;
        let stats = dashboard_stats_fixture();
        log::debug!("fetched dashboard stats: {stats:?}");
        Ok(stats)
    }

    /// # Errors
    ///
    /// `FetchError::MalformedDate` if a join date is not a calendar date.
    pub async fn users(self) -> Result<Vec<UserRecord>, FetchError> {
        delay::sleep(self.latency.users).await;
        let users = users_fixture()?;
        log::debug!("fetched {} users", users.len());
        Ok(users)
    }

    /// # Errors
    ///
    /// `FetchError::MalformedDate` if a publish date is not a calendar date.
    pub async fn posts(self) -> Result<Vec<Post>, FetchError> {
        delay::sleep(self.latency.posts).await;
        let posts = posts_fixture()?;
        log::debug!("fetched {} posts", posts.len());
        Ok(posts)
    }
}

fn dashboard_stats_fixture() -> DashboardStats {
    DashboardStats {
        total_users: 1250,
        total_posts: 847,
        active_users: 89,
        system_health: SystemHealth::Healthy,
    }
}

const AVATAR_QUERY: &str = "?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop";

fn avatar_url(photo_id: u32) -> String {
    format!("https://images.pexels.com/photos/{photo_id}/pexels-photo-{photo_id}.jpeg{AVATAR_QUERY}")
}

/// Parse an ISO `YYYY-MM-DD` date, rejecting days the calendar lacks.
fn iso_date(raw: &str) -> Result<NaiveDate, FetchError> {
    raw.parse::<NaiveDate>().map_err(|_| FetchError::MalformedDate(raw.to_owned()))
}

fn users_fixture() -> Result<Vec<UserRecord>, FetchError> {
    [
        (1, "John Doe", "john@example.com", "2024-01-15", 220_453),
        (2, "Jane Smith", "jane@example.com", "2024-02-20", 415_829),
        (3, "Mike Johnson", "mike@example.com", "2024-03-10", 1_222_271),
        (4, "Sarah Wilson", "sarah@example.com", "2024-03-25", 774_909),
        (5, "Alex Brown", "alex@example.com", "2024-04-05", 1_043_471),
        (6, "Emily Davis", "emily@example.com", "2024-04-18", 1_181_686),
    ]
    .into_iter()
    .map(|(id, name, email, join_date, photo)| {
        Ok(UserRecord {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            join_date: iso_date(join_date)?,
            avatar: avatar_url(photo),
        })
    })
    .collect()
}

fn posts_fixture() -> Result<Vec<Post>, FetchError> {
    [
        (
            1,
            "Getting Started with React 19",
            "Learn about the latest features and improvements in React 19, including better performance and new hooks.",
            "John Doe",
            "2024-12-01",
            24,
            PostCategory::Technology,
        ),
        (
            2,
            "Building Modern UIs with Tailwind CSS",
            "Discover best practices for creating beautiful and responsive user interfaces with Tailwind CSS.",
            "Jane Smith",
            "2024-11-28",
            18,
            PostCategory::Design,
        ),
        (
            3,
            "State Management with TanStack Query",
            "Master server state management in React applications using TanStack Query for better data fetching.",
            "Mike Johnson",
            "2024-11-25",
            32,
            PostCategory::Development,
        ),
        (
            4,
            "TypeScript Best Practices",
            "Learn advanced TypeScript patterns and practices to write more maintainable and type-safe code.",
            "Sarah Wilson",
            "2024-11-22",
            15,
            PostCategory::Programming,
        ),
        (
            5,
            "Optimizing React Performance",
            "Techniques and strategies for improving React application performance and user experience.",
            "Alex Brown",
            "2024-11-20",
            41,
            PostCategory::Performance,
        ),
        (
            6,
            "Modern JavaScript Features",
            "Explore the latest JavaScript features and how they can improve your development workflow.",
            "Emily Davis",
            "2024-11-18",
            27,
            PostCategory::JavaScript,
        ),
    ]
    .into_iter()
    .map(|(id, title, excerpt, author, publish_date, comments, category)| {
        Ok(Post {
            id,
            title: title.to_owned(),
            excerpt: excerpt.to_owned(),
            author: author.to_owned(),
            publish_date: iso_date(publish_date)?,
            comments,
            category,
        })
    })
    .collect()
}
