use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Course model representing a sellable product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    /// Start of the course; a course is on sale once this moment has passed.
    pub start_at: NaiveDateTime,
    pub price: Decimal,
    pub created_at: NaiveDateTime,
}

impl Course {
    /// Whether the course has started and can therefore be purchased
    pub fn is_available(&self) -> bool {
        self.start_at <= Utc::now().naive_utc()
    }
}
