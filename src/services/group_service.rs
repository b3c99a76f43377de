use crate::config::EnrollmentConfig;
use crate::error::{AppError, AppResult};
use crate::models::{GroupOccupancy, StudyGroup};
use crate::repositories::GroupRepository;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Service distributing purchasers across capacity-bounded study groups.
///
/// All capacity checks and group creation for one course run under a row
/// lock on that course, so concurrent assignments serialize per course and
/// a group can never be filled past capacity. Assignments for different
/// courses do not contend.
pub struct GroupService {
    pool: PgPool,
    group_repo: Arc<GroupRepository>,
    config: EnrollmentConfig,
}

impl GroupService {
    pub fn new(pool: PgPool, group_repo: Arc<GroupRepository>, config: EnrollmentConfig) -> Self {
        Self {
            pool,
            group_repo,
            config,
        }
    }

    /// Place a user into a study group of the course, creating groups as
    /// needed. Idempotent: a user already seated keeps their seat.
    ///
    /// Called after access has been granted; also safe to call again if an
    /// earlier attempt failed mid-way.
    pub async fn assign(&self, user_id: Uuid, course_id: Uuid) -> AppResult<StudyGroup> {
        // Cheap idempotence check before taking the course lock.
        if let Some(group) = self.group_repo.find_for_user(course_id, user_id).await? {
            return Ok(group);
        }

        let mut tx = self.pool.begin().await?;

        // Serialization point: every assignment for this course queues on
        // the course row until we commit.
        let locked = sqlx::query(
            r#"
            SELECT id FROM courses WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            return Err(AppError::NotFound(format!("Course {} not found", course_id)));
        }

        // Re-check under the lock; a racing assignment may have seated the
        // user between the fast path and here.
        let seated = sqlx::query_as::<_, StudyGroup>(
            r#"
            SELECT g.id, g.course_id, g.name, g.created_at
            FROM study_groups g
            JOIN group_members m ON m.group_id = g.id
            WHERE g.course_id = $1 AND m.user_id = $2
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(group) = seated {
            tx.commit().await?;
            return Ok(group);
        }

        let mut groups = occupancy(&mut tx, course_id).await?;

        if groups.is_empty() {
            info!(
                %course_id,
                count = self.config.default_group_count,
                "first assignment for course, creating initial groups"
            );
            for i in 1..=self.config.default_group_count {
                insert_group(&mut tx, course_id, &format!("Group {}", i)).await?;
            }
            groups = occupancy(&mut tx, course_id).await?;
        }

        let open_seat = groups
            .iter()
            .find(|g| g.member_count < self.config.max_group_users)
            .cloned();

        let group = match open_seat {
            Some(occupied) => occupied.into_group(),
            None => {
                let name = format!("Group {}", groups.len() + 1);
                warn!(%course_id, %name, "all groups full, opening a new one");
                insert_group(&mut tx, course_id, &name).await?
            }
        };

        sqlx::query(
            r#"
            INSERT INTO group_members (group_id, user_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(group.id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(%user_id, %course_id, group = %group.name, "user assigned to study group");
        Ok(group)
    }
}

/// Load the course's groups with member counts, least loaded first.
/// Runs on the assignment transaction so counts are read under the lock.
async fn occupancy(conn: &mut PgConnection, course_id: Uuid) -> sqlx::Result<Vec<GroupOccupancy>> {
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
    .fetch_all(&mut *conn)
    .await
}

async fn insert_group(
    conn: &mut PgConnection,
    course_id: Uuid,
    name: &str,
) -> sqlx::Result<StudyGroup> {
    sqlx::query_as::<_, StudyGroup>(
        r#"
        INSERT INTO study_groups (course_id, name)
        VALUES ($1, $2)
        RETURNING id, course_id, name, created_at
        "#,
    )
    .bind(course_id)
    .bind(name)
    .fetch_one(&mut *conn)
    .await
}
