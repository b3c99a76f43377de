use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Access model: the record of a paid-for course purchase.
/// At most one row per (user, course) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Access {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub granted_at: NaiveDateTime,
}
