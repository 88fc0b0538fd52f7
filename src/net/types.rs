//! Payload types returned by the data functions in `net::api`.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so a future HTTP backend can return the
//! same JSON shape the mock literals describe.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_posts: u64,
    pub active_users: u64,
    pub system_health: SystemHealth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Healthy,
    Degraded,
    Down,
}

impl SystemHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemHealth::Healthy => "healthy",
            SystemHealth::Degraded => "degraded",
            SystemHealth::Down => "down",
        }
    }
}

/// A member shown on the users page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub join_date: NaiveDate,
    /// Avatar image URL.
    pub avatar: String,
}

/// A blog post shown on the posts page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub publish_date: NaiveDate,
    pub comments: u32,
    pub category: PostCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostCategory {
    Technology,
    Design,
    Development,
    Programming,
    Performance,
    JavaScript,
}

impl PostCategory {
    pub fn label(self) -> &'static str {
        match self {
            PostCategory::Technology => "Technology",
            PostCategory::Design => "Design",
            PostCategory::Development => "Development",
            PostCategory::Programming => "Programming",
            PostCategory::Performance => "Performance",
            PostCategory::JavaScript => "JavaScript",
        }
    }

    /// Badge color modifier used by the post card.
    pub fn badge_class(self) -> &'static str {
        match self {
            PostCategory::Technology => "badge badge--blue",
            PostCategory::Design => "badge badge--purple",
            PostCategory::Development => "badge badge--green",
            PostCategory::Programming => "badge badge--yellow",
            PostCategory::Performance => "badge badge--red",
            PostCategory::JavaScript => "badge badge--orange",
        }
    }
}
