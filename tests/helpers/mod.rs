//! Shared wiring and seeding helpers for the integration tests.
#![allow(dead_code)]

use chrono::{Duration, Utc};
use coursepay_backend::config::{AppConfig, EnrollmentConfig};
use coursepay_backend::models::{Course, User};
use coursepay_backend::{telemetry, AppState};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// The production default starting balance (1000.00)
pub fn starting_balance() -> Decimal {
    Decimal::new(100000, 2)
}

/// The production default course price used across scenarios (100.00)
pub fn course_price() -> Decimal {
    Decimal::new(10000, 2)
}

/// App wired with the default enrollment policy (30 per group, 10 groups)
pub fn test_state(pool: PgPool) -> AppState {
    test_state_with(pool, EnrollmentConfig::default())
}

/// App wired with a custom enrollment policy
pub fn test_state_with(pool: PgPool, enrollment: EnrollmentConfig) -> AppState {
    telemetry::init(&AppConfig::default());
    AppState::new(pool, enrollment)
}

/// Enrollment policy with small numbers for capacity tests
pub fn small_groups(max_group_users: i64, default_group_count: u32) -> EnrollmentConfig {
    EnrollmentConfig {
        max_group_users,
        default_group_count,
        starting_balance: starting_balance(),
    }
}

/// Create a student with the default starting balance
pub async fn seed_user(state: &AppState, tag: &str) -> User {
    state
        .user_repo
        .create(
            &format!("{}@example.com", tag),
            &format!("Student {}", tag),
            starting_balance(),
        )
        .await
        .expect("failed to seed user")
}

/// Create a course that started an hour ago
pub async fn seed_course(state: &AppState, title: &str, price: Decimal) -> Course {
    state
        .course_repo
        .create(
            "Grace Hopper",
            title,
            Utc::now().naive_utc() - Duration::hours(1),
            price,
        )
        .await
        .expect("failed to seed course")
}

/// Create a course that only starts next week
pub async fn seed_future_course(state: &AppState, title: &str, price: Decimal) -> Course {
    state
        .course_repo
        .create(
            "Grace Hopper",
            title,
            Utc::now().naive_utc() + Duration::days(7),
            price,
        )
        .await
        .expect("failed to seed course")
}

/// Insert a purchase record directly, bypassing settlement (test seeding)
pub async fn seed_access(pool: &PgPool, user_id: Uuid, course_id: Uuid) {
    sqlx::query("INSERT INTO accesses (user_id, course_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(course_id)
        .execute(pool)
        .await
        .expect("failed to seed access");
}

/// Insert a named study group directly (test seeding)
pub async fn seed_group(pool: &PgPool, course_id: Uuid, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO study_groups (course_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(course_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("failed to seed group")
}

/// Seat a user in a group directly (test seeding)
pub async fn seed_membership(pool: &PgPool, group_id: Uuid, user_id: Uuid) {
    sqlx::query("INSERT INTO group_members (group_id, user_id) VALUES ($1, $2)")
        .bind(group_id)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("failed to seed membership");
}
