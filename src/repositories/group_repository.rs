use crate::models::{GroupMember, GroupOccupancy, StudyGroup};
use sqlx::{PgPool, Result as SqlxResult};
use uuid::Uuid;

/// Repository for study group data access
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new GroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the group a user belongs to within a course, if any
    pub async fn find_for_user(
        &self,
        course_id: Uuid,
        user_id: Uuid,
    ) -> SqlxResult<Option<StudyGroup>> {
        sqlx::query_as::<_, StudyGroup>(
            r#"
            SELECT g.id, g.course_id, g.name, g.created_at
            FROM study_groups g
            JOIN group_members m ON m.group_id = g.id
            WHERE g.course_id = $1 AND m.user_id = $2
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Load all groups of a course with their member counts, least loaded
    /// first; ties resolve in name order
    pub async fn occupancy_by_course(&self, course_id: Uuid) -> SqlxResult<Vec<GroupOccupancy>> {
        sqlx::query_as::<_, GroupOccupancy>(
            r#"
            SELECT g.id, g.course_id, g.name, g.created_at,
                   COUNT(m.user_id) AS member_count
            FROM study_groups g
            LEFT JOIN group_members m ON m.group_id = g.id
            WHERE g.course_id = $1
            GROUP BY g.id, g.course_id, g.name, g.created_at
            ORDER BY member_count ASC, g.name ASC, g.id ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Find all members of a group, earliest joiner first
    pub async fn members(&self, group_id: Uuid) -> SqlxResult<Vec<GroupMember>> {
        sqlx::query_as::<_, GroupMember>(
            r#"
            SELECT group_id, user_id, joined_at
            FROM group_members
            WHERE group_id = $1
            ORDER BY joined_at ASC
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Get member count for a group
    pub async fn member_count(&self, group_id: Uuid) -> SqlxResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM group_members
            WHERE group_id = $1
            "#,
        )
        .bind(group_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
