use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lesson model: a single unit of course content
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lesson {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub link: String,
}
