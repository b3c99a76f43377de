use crate::models::Lesson;
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

/// Repository for lesson data access
pub struct LessonRepository {
    pool: PgPool,
}

impl LessonRepository {
    /// Create a new LessonRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new lesson
    pub async fn create(&self, course_id: Uuid, title: &str, link: &str) -> SqlxResult<Lesson> {
        sqlx::query_as::<_, Lesson>(
            r#"
            INSERT INTO lessons (course_id, title, link)
            VALUES ($1, $2, $3)
            RETURNING id, course_id, title, link
            "#,
        )
        .bind(course_id)
        .bind(title)
        .bind(link)
        .fetch_one(&self.pool)
        .await
    }

    /// Find all lessons of a course
    pub async fn find_by_course(&self, course_id: Uuid) -> SqlxResult<Vec<Lesson>> {
        sqlx::query_as::<_, Lesson>(
            r#"
            SELECT id, course_id, title, link
            FROM lessons
            WHERE course_id = $1
            ORDER BY title ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Find lessons for several courses at once (catalog listing)
    pub async fn find_by_courses(&self, course_ids: &[Uuid]) -> SqlxResult<Vec<Lesson>> {
        sqlx::query_as::<_, Lesson>(
            r#"
            SELECT id, course_id, title, link
            FROM lessons
            WHERE course_id = ANY($1)
            ORDER BY title ASC
            "#,
        )
        .bind(course_ids)
        .fetch_all(&self.pool)
        .await
    }
}
