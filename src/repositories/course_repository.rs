use crate::models::Course;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

/// Repository for course data access
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new CourseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new course
    pub async fn create(
        &self,
        author: &str,
        title: &str,
        start_at: NaiveDateTime,
        price: Decimal,
    ) -> SqlxResult<Course> {
        sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (author, title, start_at, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author, title, start_at, price, created_at
            "#,
        )
        .bind(author)
        .bind(title)
        .bind(start_at)
        .bind(price)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a course by UUID
    pub async fn find_by_id(&self, id: Uuid) -> SqlxResult<Option<Course>> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, author, title, start_at, price, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// List courses already on sale that the user has not purchased,
    /// newest first
    pub async fn list_available(
        &self,
        user_id: Uuid,
        now: NaiveDateTime,
    ) -> SqlxResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.author, c.title, c.start_at, c.price, c.created_at
            FROM courses c
            WHERE c.start_at <= $2
              AND NOT EXISTS (
                  SELECT 1 FROM accesses a
                  WHERE a.course_id = c.id AND a.user_id = $1
              )
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await
    }
}
