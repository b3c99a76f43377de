use crate::models::Access;
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

/// Repository for purchase record data access
pub struct AccessRepository {
    pool: PgPool,
}

impl AccessRepository {
    /// Create a new AccessRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether the user already purchased the course
    pub async fn exists(&self, user_id: Uuid, course_id: Uuid) -> SqlxResult<bool> {
        let row = sqlx::query(
            r#"
            SELECT 1 AS present
            FROM accesses
            WHERE user_id = $1 AND course_id = $2
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    /// Find the purchase record for a (user, course) pair
    pub async fn find(&self, user_id: Uuid, course_id: Uuid) -> SqlxResult<Option<Access>> {
        sqlx::query_as::<_, Access>(
            r#"
            SELECT id, user_id, course_id, granted_at
            FROM accesses
            WHERE user_id = $1 AND course_id = $2
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find all purchases of a user, most recent first
    pub async fn find_by_user(&self, user_id: Uuid) -> SqlxResult<Vec<Access>> {
        sqlx::query_as::<_, Access>(
            r#"
            SELECT id, user_id, course_id, granted_at
            FROM accesses
            WHERE user_id = $1
            ORDER BY granted_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
