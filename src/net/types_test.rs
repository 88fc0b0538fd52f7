use super::*;

// =============================================================
// Wire shape
// =============================================================

#[test]
fn dashboard_stats_reads_camel_case_json() {
    let json = r#"{"totalUsers":1250,"totalPosts":847,"activeUsers":89,"systemHealth":"healthy"}"#;
    let stats: DashboardStats = serde_json::from_str(json).unwrap();
    assert_eq!(stats.total_users, 1250);
    assert_eq!(stats.total_posts, 847);
    assert_eq!(stats.active_users, 89);
    assert_eq!(stats.system_health, SystemHealth::Healthy);
}

#[test]
fn post_writes_camel_case_keys() {
    let post = Post {
        id: 9,
        title: "T".to_owned(),
        excerpt: "E".to_owned(),
        author: "A".to_owned(),
        publish_date: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(),
        comments: 3,
        category: PostCategory::JavaScript,
    };
    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(value["publishDate"], "2024-11-18");
    assert_eq!(value["category"], "JavaScript");
}

#[test]
fn user_reads_iso_join_date() {
    let json = r#"{"id":1,"name":"N","email":"n@example.com","joinDate":"2024-01-15","avatar":"a.jpg"}"#;
    let user: UserRecord = serde_json::from_str(json).unwrap();
    assert_eq!(user.join_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn impossible_dates_are_rejected() {
    for bad in ["2024-02-31", "2023-02-29", "2024-04-31", "2024-13-01"] {
        let json = format!(
            r#"{{"id":1,"title":"T","excerpt":"E","author":"A","publishDate":"{bad}","comments":0,"category":"Design"}}"#
        );
        assert!(serde_json::from_str::<Post>(&json).is_err(), "expected {bad} to be rejected");
    }
}

#[test]
fn unknown_health_value_is_rejected() {
    let json = r#"{"totalUsers":1,"totalPosts":1,"activeUsers":1,"systemHealth":"melting"}"#;
    assert!(serde_json::from_str::<DashboardStats>(json).is_err());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn system_health_as_str_matches_wire_value() {
    for health in [SystemHealth::Healthy, SystemHealth::Degraded, SystemHealth::Down] {
        let wire = serde_json::to_value(health).unwrap();
        assert_eq!(wire, health.as_str());
    }
}

#[test]
fn every_category_has_a_distinct_badge() {
    let all = [
        PostCategory::Technology,
        PostCategory::Design,
        PostCategory::Development,
        PostCategory::Programming,
        PostCategory::Performance,
        PostCategory::JavaScript,
    ];
    let mut classes: Vec<_> = all.iter().map(|c| c.badge_class()).collect();
    classes.sort_unstable();
    classes.dedup();
    assert_eq!(classes.len(), all.len());
}
