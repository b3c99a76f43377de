mod helpers;

use helpers::*;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

// ============================================================================
// User & Balance
// ============================================================================

#[sqlx::test]
async fn test_user_create_initializes_balance(pool: PgPool) {
    let state = test_state(pool);

    let user = seed_user(&state, "alice").await;

    let balance = state
        .balance_repo
        .find_by_user(user.id)
        .await
        .expect("query failed")
        .expect("balance row should exist");

    assert_eq!(balance.user_id, user.id);
    assert_eq!(balance.amount, starting_balance());
}

#[sqlx::test]
async fn test_user_find_by_email(pool: PgPool) {
    let state = test_state(pool);

    let created = seed_user(&state, "bob").await;

    let found = state
        .user_repo
        .find_by_email("bob@example.com")
        .await
        .expect("query failed")
        .expect("user should exist");

    assert_eq!(found.id, created.id);
    assert_eq!(found.full_name, "Student bob");
}

#[sqlx::test]
async fn test_duplicate_email_rejected(pool: PgPool) {
    let state = test_state(pool);

    seed_user(&state, "carol").await;

    let duplicate = state
        .user_repo
        .create("carol@example.com", "Another Carol", starting_balance())
        .await;

    assert!(duplicate.is_err());
}

#[sqlx::test]
async fn test_balance_cannot_go_negative(pool: PgPool) {
    let state = test_state(pool.clone());

    let user = seed_user(&state, "dave").await;

    // The schema CHECK is the safety net behind settlement's own check.
    let result = sqlx::query("UPDATE balances SET amount = -1 WHERE user_id = $1")
        .bind(user.id)
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

// ============================================================================
// Course & Lesson
// ============================================================================

#[sqlx::test]
async fn test_course_create_and_find(pool: PgPool) {
    let state = test_state(pool);

    let course = seed_course(&state, "Rust for Analysts", course_price()).await;

    let found = state
        .course_repo
        .find_by_id(course.id)
        .await
        .expect("query failed")
        .expect("course should exist");

    assert_eq!(found.title, "Rust for Analysts");
    assert_eq!(found.price, course_price());
    assert!(found.is_available());
}

#[sqlx::test]
async fn test_lessons_by_course(pool: PgPool) {
    let state = test_state(pool);

    let course = seed_course(&state, "Databases", course_price()).await;
    let other = seed_course(&state, "Networking", course_price()).await;

    state
        .lesson_repo
        .create(course.id, "Intro", "https://lessons.example.com/db/1")
        .await
        .expect("failed to create lesson");
    state
        .lesson_repo
        .create(course.id, "Joins", "https://lessons.example.com/db/2")
        .await
        .expect("failed to create lesson");
    state
        .lesson_repo
        .create(other.id, "Sockets", "https://lessons.example.com/net/1")
        .await
        .expect("failed to create lesson");

    let lessons = state
        .lesson_repo
        .find_by_course(course.id)
        .await
        .expect("query failed");

    assert_eq!(lessons.len(), 2);
    assert!(lessons.iter().all(|l| l.course_id == course.id));
}

#[sqlx::test]
async fn test_available_courses_listing(pool: PgPool) {
    let state = test_state(pool.clone());

    let user = seed_user(&state, "erin").await;
    let open = seed_course(&state, "Open Course", course_price()).await;
    let purchased = seed_course(&state, "Purchased Course", course_price()).await;
    seed_future_course(&state, "Future Course", course_price()).await;

    state
        .lesson_repo
        .create(open.id, "Lesson 1", "https://lessons.example.com/open/1")
        .await
        .expect("failed to create lesson");
    seed_access(&pool, user.id, purchased.id).await;

    let listing = state
        .catalog_service
        .available_courses(user.id)
        .await
        .expect("catalog query failed");

    // Future and already-purchased courses stay out of the listing.
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].course.id, open.id);
    assert_eq!(listing[0].lessons.len(), 1);
}

// ============================================================================
// Access records
// ============================================================================

#[sqlx::test]
async fn test_access_unique_per_user_and_course(pool: PgPool) {
    let state = test_state(pool.clone());

    let user = seed_user(&state, "frank").await;
    let course = seed_course(&state, "Compilers", course_price()).await;

    seed_access(&pool, user.id, course.id).await;

    assert!(state
        .access_repo
        .exists(user.id, course.id)
        .await
        .expect("query failed"));

    let duplicate = sqlx::query("INSERT INTO accesses (user_id, course_id) VALUES ($1, $2)")
        .bind(user.id)
        .bind(course.id)
        .execute(&pool)
        .await;

    assert!(duplicate.is_err());
}

// ============================================================================
// Group occupancy
// ============================================================================

#[sqlx::test]
async fn test_group_occupancy_orders_least_loaded_first(pool: PgPool) {
    let state = test_state(pool.clone());

    let course = seed_course(&state, "Statistics", course_price()).await;
    let crowded = seed_group(&pool, course.id, "Group 1").await;
    let quiet = seed_group(&pool, course.id, "Group 2").await;
    let empty = seed_group(&pool, course.id, "Group 3").await;

    for tag in ["g1", "g2", "g3"] {
        let user = seed_user(&state, tag).await;
        seed_membership(&pool, crowded, user.id).await;
    }
    let lone = seed_user(&state, "lone").await;
    seed_membership(&pool, quiet, lone.id).await;

    let occupancy = state
        .group_repo
        .occupancy_by_course(course.id)
        .await
        .expect("query failed");

    let order: Vec<(Uuid, i64)> = occupancy.iter().map(|g| (g.id, g.member_count)).collect();
    assert_eq!(order, vec![(empty, 0), (quiet, 1), (crowded, 3)]);
}

#[sqlx::test]
async fn test_group_member_count(pool: PgPool) {
    let state = test_state(pool.clone());

    let course = seed_course(&state, "Algorithms", course_price()).await;
    let group = seed_group(&pool, course.id, "Group 1").await;

    assert_eq!(
        state.group_repo.member_count(group).await.expect("query failed"),
        0
    );

    let user = seed_user(&state, "gina").await;
    seed_membership(&pool, group, user.id).await;

    assert_eq!(
        state.group_repo.member_count(group).await.expect("query failed"),
        1
    );

    let members = state.group_repo.members(group).await.expect("query failed");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, user.id);
}

#[sqlx::test]
async fn test_balance_has_two_decimal_places(pool: PgPool) {
    let state = test_state(pool);

    let user = seed_user(&state, "hana").await;

    let balance = state
        .balance_repo
        .find_by_user(user.id)
        .await
        .expect("query failed")
        .expect("balance row should exist");

    // NUMERIC(10, 2) round-trips exactly; no float drift.
    assert_eq!(balance.amount, Decimal::new(100000, 2));
}
