//! Balance model for the points users spend on courses

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's spendable balance. Exactly one row per user, created together
/// with the user. `amount` never goes below zero; the schema carries a
/// matching CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Balance {
    pub user_id: Uuid,
    pub amount: Decimal,
    pub updated_at: NaiveDateTime,
}

impl Balance {
    /// Whether this balance can cover the given price
    pub fn covers(&self, price: Decimal) -> bool {
        self.amount >= price
    }
}
