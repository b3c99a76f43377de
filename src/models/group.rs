use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Study group model: a fixed-capacity cohort within one course
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudyGroup {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// A study group together with its current member count, as produced by the
/// occupancy query (least-loaded first)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupOccupancy {
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub member_count: i64,
}

impl GroupOccupancy {
    /// Strip the count, leaving the plain group
    pub fn into_group(self) -> StudyGroup {
        StudyGroup {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}
